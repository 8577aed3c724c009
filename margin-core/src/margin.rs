/// Number of sweep samples over `P_uf` in [0, 1] (step 0.01).
pub const GRID_SAMPLES: usize = 101;

/// The four probabilities that drive the margin curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub p_ab_pred: f64,
    pub p_prev_ab: f64,
    pub p_fn: f64,
    pub p_man: f64,
}

impl Parameters {
    pub fn new(p_ab_pred: f64, p_prev_ab: f64, p_fn: f64, p_man: f64) -> Self {
        Self {
            p_ab_pred,
            p_prev_ab,
            p_fn,
            p_man,
        }
    }

    /// Failure probability of the automated pipeline on poor input.
    pub fn algorithm_failure(&self) -> f64 {
        self.p_ab_pred * self.p_prev_ab
    }
}

/// Evenly spaced sweep values of `P_uf`, endpoints included.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    points: Vec<f64>,
}

impl Grid {
    pub fn uniform(samples: usize) -> Self {
        let points = match samples {
            0 => Vec::new(),
            1 => vec![0.0],
            n => {
                let last = (n - 1) as f64;
                (0..n).map(|i| i as f64 / last).collect()
            }
        };
        Self { points }
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::uniform(GRID_SAMPLES)
    }
}

/// Margin values, one per grid sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    values: Vec<f64>,
}

impl Curve {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<f64>> for Curve {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

/// Manual-method failure minus the blended failure rate at `u`.
///
/// `u` is the fraction of cases with poor input. The result is not clamped:
/// a negative margin means the manual method fails more often.
pub fn margin_at(params: &Parameters, u: f64) -> f64 {
    params.p_man - (u * params.algorithm_failure() + (1.0 - u) * params.p_fn)
}

pub fn evaluate(params: &Parameters, grid: &Grid) -> Curve {
    Curve {
        values: grid.points().iter().map(|&u| margin_at(params, u)).collect(),
    }
}
