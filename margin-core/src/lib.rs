pub mod chart;
pub mod controller;
pub mod margin;
pub mod presets;

pub use chart::{render, ChartLabels, ChartSpec};
pub use controller::{
    resolve, ControlEvent, ControlPanel, ControllerOutput, InteractionController, Mode, Slider,
    Trigger,
};
pub use margin::{evaluate, margin_at, Curve, Grid, Parameters, GRID_SAMPLES};
pub use presets::{Preset, PresetStore, DEFAULT_P_MAN};

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read preset file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse preset source: {0}")]
    Parse(String),
    #[error("preset '{preset}' is missing required field '{field}'")]
    MissingField { preset: String, field: &'static str },
    #[error("preset '{preset}' field '{field}' must lie in [0, 1], got {value}")]
    OutOfRange {
        preset: String,
        field: &'static str,
        value: f64,
    },
    #[error("preset '{0}' is declared more than once")]
    DuplicatePreset(String),
    #[error("preset source declares no presets")]
    Empty,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown preset '{0}'")]
pub struct UnknownPresetError(pub String);

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("grid has {grid} samples but curve has {curve}")]
pub struct ShapeError {
    pub grid: usize,
    pub curve: usize,
}

#[derive(thiserror::Error, Debug)]
pub enum MarginError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    UnknownPreset(#[from] UnknownPresetError),
    #[error(transparent)]
    Shape(#[from] ShapeError),
}
