use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "margin", version, about = "Failure-rate margin explorer")]
pub struct Cli {
    /// Preset configuration file (JSON, or TOML by extension)
    #[arg(long, global = true, default_value = "presets_config.json")]
    pub presets: PathBuf,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List presets in declaration order
    Presets,
    /// Render the chart for a preset to an image file (.png or .svg)
    Export {
        output: PathBuf,
        /// Preset to render; defaults to the first one
        #[arg(long)]
        preset: Option<String>,
        #[arg(long, default_value_t = margin_gui::EXPORT_WIDTH)]
        width: u32,
        #[arg(long, default_value_t = margin_gui::EXPORT_HEIGHT)]
        height: u32,
    },
}
