use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoints};
use margin_core::ChartSpec;

pub(crate) const SERIES_COLOR: egui::Color32 = egui::Color32::from_rgb(86, 156, 214);

pub(crate) fn render_chart(ui: &mut egui::Ui, spec: &ChartSpec, height: f32) {
    ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
        ui.label(egui::RichText::new(&spec.title).strong().size(16.0));
    });

    let bounds = spec.x_range().zip(spec.y_range());
    Plot::new("margin_plot")
        .height(height)
        .legend(Legend::default())
        .x_axis_label(spec.x_label.as_str())
        .y_axis_label(spec.y_label.as_str())
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .show(ui, |plot_ui| {
            let points: PlotPoints = spec.points.iter().map(|(x, y)| [*x, *y]).collect();
            plot_ui.line(
                Line::new(points)
                    .color(SERIES_COLOR)
                    .name(spec.series_name.as_str()),
            );
            if let Some(((x_min, x_max), (y_min, y_max))) = bounds {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max([x_min, y_min], [x_max, y_max]));
            }
        });
}
