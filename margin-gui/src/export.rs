use crate::plot::SERIES_COLOR;
use crate::GuiError;
use margin_core::ChartSpec;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

pub const EXPORT_WIDTH: u32 = 1200;
pub const EXPORT_HEIGHT: u32 = 700;

/// Writes `spec` to an image file. `.svg` paths use the SVG backend, every
/// other path is encoded as a bitmap (PNG).
pub fn export_chart(spec: &ChartSpec, path: &Path, width: u32, height: u32) -> Result<(), GuiError> {
    let (Some(x_range), Some(y_range)) = (spec.x_range(), spec.y_range()) else {
        return Err(GuiError::Export("No samples to export.".to_string()));
    };
    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    let result = if is_svg {
        let root = SVGBackend::new(path, (width, height)).into_drawing_area();
        draw_chart(root, spec, x_range, y_range)
    } else {
        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        draw_chart(root, spec, x_range, y_range)
    };
    match result {
        Ok(()) => {
            log::info!("Exported chart to '{}'", path.display());
            Ok(())
        }
        Err(err) => {
            log::error!("Failed to export chart to '{}': {err}", path.display());
            Err(GuiError::Export(err))
        }
    }
}

fn draw_chart<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    spec: &ChartSpec,
    (x_min, x_max): (f64, f64),
    (y_min, y_max): (f64, f64),
) -> Result<(), String> {
    let text_color = RGBColor(40, 40, 40);
    let axis_color = RGBColor(120, 120, 120);
    let series_color = RGBColor(SERIES_COLOR.r(), SERIES_COLOR.g(), SERIES_COLOR.b());

    root.fill(&WHITE).map_err(|e| e.to_string())?;

    // Plotters captions are single-line.
    let caption = spec.title.replace('\n', "  |  ");
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, ("sans-serif", 22).into_font().color(&text_color))
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .x_desc(spec.x_label.as_str())
        .y_desc(spec.y_label.as_str())
        .axis_desc_style(("sans-serif", 16).into_font().color(&text_color))
        .label_style(("sans-serif", 14).into_font().color(&text_color))
        .axis_style(&axis_color)
        .light_line_style(&RGBColor(230, 230, 230))
        .draw()
        .map_err(|e| e.to_string())?;

    chart
        .draw_series(LineSeries::new(
            spec.points.iter().copied(),
            series_color.stroke_width(2),
        ))
        .map_err(|e| e.to_string())?
        .label(spec.series_name.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &series_color));

    chart
        .configure_series_labels()
        .background_style(RGBColor(240, 240, 240))
        .border_style(axis_color)
        .label_font(("sans-serif", 14).into_font().color(&text_color))
        .position(SeriesLabelPosition::LowerRight)
        .margin(12)
        .draw()
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())?;
    Ok(())
}
