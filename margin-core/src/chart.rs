use crate::margin::{Curve, Grid, Parameters};
use crate::ShapeError;

pub const X_LABEL: &str = "Probability of User Failure";
pub const Y_LABEL: &str = "Failure Rate Margin (Manual Method Failure - SS Failure)";

/// Title and axis metadata attached to a rendered curve.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series_name: String,
}

impl ChartLabels {
    /// Labels for a curve driven by `preset`, with the live values on the
    /// second title line.
    pub fn for_preset(preset: &str, params: &Parameters) -> Self {
        Self {
            title: format!(
                "Preset: {preset}\n{},{},{},{}",
                params.p_ab_pred, params.p_prev_ab, params.p_fn, params.p_man
            ),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            series_name: Y_LABEL.to_string(),
        }
    }
}

/// A single line series ready for a plotting surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series_name: String,
    pub points: Vec<(f64, f64)>,
}

impl ChartSpec {
    pub fn x_range(&self) -> Option<(f64, f64)> {
        bounds(self.points.iter().map(|(x, _)| *x))
    }

    /// Y bounds of the series, widened when the curve is flat.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        let (min, max) = bounds(self.points.iter().map(|(_, y)| *y))?;
        if max - min < f64::EPSILON {
            let pad = (min.abs() * 0.1).max(0.01);
            Some((min - pad, max + pad))
        } else {
            Some((min, max))
        }
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Pairs every grid sample with its curve value.
pub fn render(grid: &Grid, curve: &Curve, labels: ChartLabels) -> Result<ChartSpec, ShapeError> {
    if grid.len() != curve.len() {
        return Err(ShapeError {
            grid: grid.len(),
            curve: curve.len(),
        });
    }
    let points = grid
        .points()
        .iter()
        .copied()
        .zip(curve.values().iter().copied())
        .collect();
    Ok(ChartSpec {
        title: labels.title,
        x_label: labels.x_label,
        y_label: labels.y_label,
        series_name: labels.series_name,
        points,
    })
}
