use eframe::egui;
use margin_core::{Grid, InteractionController, MarginError, PresetStore};
use std::sync::Arc;

mod app;
mod export;
mod plot;

pub use app::MarginApp;
pub use export::{export_chart, EXPORT_HEIGHT, EXPORT_WIDTH};

/// Window settings for the explorer.
///
/// Controls the native window title and its initial inner size in logical
/// pixels. The defaults match the layout of one chart above the control
/// block without scrolling on a typical laptop display.
#[derive(Debug, Clone)]
pub struct GuiConfig {
    /// Window title, also used as the eframe application name
    pub title: String,
    /// Initial inner width in logical pixels
    pub width: f32,
    /// Initial inner height in logical pixels
    pub height: f32,
}

impl Default for GuiConfig {
    /// Creates a GuiConfig titled "Interactive Simulation" at 1100x760.
    fn default() -> Self {
        Self {
            title: "Interactive Simulation".to_string(),
            width: 1100.0,
            height: 760.0,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GuiError {
    #[error("gui error: {0}")]
    Gui(String),
    #[error("export error: {0}")]
    Export(String),
    #[error(transparent)]
    Core(#[from] MarginError),
}

/// Builds the controller for `store` on the shared default grid.
///
/// # Parameters
///
/// * `store` - Loaded presets; the first one becomes the starting preset
///
/// # Returns
///
/// An `InteractionController` positioned on the default preset that has not
/// handled any event yet.
pub fn controller_for(store: PresetStore) -> InteractionController {
    InteractionController::new(Arc::new(store), Arc::new(Grid::default()))
}

/// Runs the explorer window until the user closes it.
///
/// The first chart is computed before the window opens, so a broken
/// configuration never reaches the event loop.
///
/// # Parameters
///
/// * `config` - Window title and initial dimensions
/// * `store` - Presets loaded at startup; read-only for the whole session
///
/// # Returns
///
/// * `Ok(())` - The user closed the window
/// * `Err(GuiError::Core)` - The first-load resolution failed
/// * `Err(GuiError::Gui)` - eframe failed to create or run the window
///
/// # Event Handling
///
/// 1. **Collect**: widgets raised during a frame form one event batch
/// 2. **Resolve**: the batch goes to the `InteractionController`
/// 3. **Echo**: the resolved values overwrite the slider widgets
pub fn run_gui(config: GuiConfig, store: PresetStore) -> Result<(), GuiError> {
    let app = MarginApp::new(controller_for(store))?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([config.width, config.height]),
        ..Default::default()
    };
    log::info!("Starting '{}' window", config.title);

    eframe::run_native(&config.title, options, Box::new(move |_cc| Box::new(app)))
        .map_err(|err| GuiError::Gui(err.to_string()))
}
