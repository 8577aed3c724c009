mod commands;
mod output;

use clap::Parser;
use commands::{Cli, Commands};
use margin_core::{ControlEvent, PresetStore};
use margin_gui::{controller_for, export_chart, run_gui, GuiConfig};
use output::{print_error, print_info, print_preset_list};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let store = match PresetStore::load(&cli.presets) {
        Ok(store) => store,
        Err(err) => {
            print_error(&err.to_string());
            return Err(err.into());
        }
    };

    match cli.command {
        None => run_gui(GuiConfig::default(), store)?,
        Some(Commands::Presets) => print_preset_list(&store),
        Some(Commands::Export {
            output,
            preset,
            width,
            height,
        }) => {
            let mut controller = controller_for(store);
            let events: Vec<ControlEvent> =
                preset.into_iter().map(ControlEvent::PresetSelected).collect();
            let result = controller.handle(&events)?;
            export_chart(&result.chart, &output, width, height)?;
            print_info(&format!(
                "Exported preset '{}' to {}",
                controller.panel().preset,
                output.display()
            ));
        }
    }
    Ok(())
}
