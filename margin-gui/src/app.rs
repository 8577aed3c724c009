use crate::export::{export_chart, EXPORT_HEIGHT, EXPORT_WIDTH};
use crate::plot::render_chart;
use eframe::egui;
use margin_core::{
    ControlEvent, ControllerOutput, InteractionController, MarginError, Mode, Slider,
};
use std::path::Path;

const CHART_HEIGHT: f32 = 420.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportFormat {
    Png,
    Svg,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Svg => "svg",
        }
    }
}

/// The explorer window: one chart driven by a preset dropdown, four sliders
/// and a reset button.
pub struct MarginApp {
    controller: InteractionController,
    output: ControllerOutput,
    error: Option<String>,
    notice: Option<String>,
}

impl MarginApp {
    pub fn new(mut controller: InteractionController) -> Result<Self, MarginError> {
        let output = controller.initial()?;
        Ok(Self {
            controller,
            output,
            error: None,
            notice: None,
        })
    }

    pub fn output(&self) -> &ControllerOutput {
        &self.output
    }

    /// Last rejected batch or failed export, cleared by the next good batch.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Last successful export.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Hands one frame's worth of control events to the controller. A
    /// rejected batch keeps the previous chart and slider values.
    pub fn dispatch(&mut self, events: &[ControlEvent]) {
        if events.is_empty() {
            return;
        }
        match self.controller.handle(events) {
            Ok(output) => {
                self.output = output;
                self.error = None;
            }
            Err(err) => {
                log::error!("{err}");
                self.error = Some(err.to_string());
            }
        }
    }

    fn preset_selector(&self, ui: &mut egui::Ui, events: &mut Vec<ControlEvent>) {
        let selected = self.controller.panel().preset.clone();
        ui.label("Preset");
        egui::ComboBox::from_id_source("preset_dropdown")
            .selected_text(selected.as_str())
            .width(320.0)
            .show_ui(ui, |ui| {
                for name in self.controller.store().names() {
                    if ui.selectable_label(name == selected, name).clicked() && name != selected {
                        events.push(ControlEvent::PresetSelected(name.to_string()));
                    }
                }
            });
    }

    fn sliders(&self, ui: &mut egui::Ui, events: &mut Vec<ControlEvent>) {
        for slider in Slider::ALL {
            ui.label(slider.label());
            let mut value = slider.get(&self.output.sliders);
            let response = ui.add(
                egui::Slider::new(&mut value, 0.0..=1.0)
                    .step_by(0.01)
                    .fixed_decimals(2),
            );
            if response.changed() {
                events.push(ControlEvent::SliderChanged { slider, value });
            }
            ui.add_space(4.0);
        }
    }

    /// Writes the current chart to `path` and reports the outcome in the
    /// status line.
    pub fn export_to(&mut self, path: &Path) {
        match export_chart(&self.output.chart, path, EXPORT_WIDTH, EXPORT_HEIGHT) {
            Ok(()) => {
                self.notice = Some(format!("Exported chart to {}", path.display()));
                self.error = None;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    fn export(&mut self, format: ExportFormat) {
        let extension = format.extension();
        let Some(path) = rfd::FileDialog::new()
            .add_filter(extension.to_uppercase(), &[extension])
            .set_file_name(format!("margin.{extension}"))
            .save_file()
        else {
            return;
        };
        self.export_to(&path);
    }
}

impl eframe::App for MarginApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();
        let mut export_request = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Interactive Simulation");
                render_chart(ui, &self.output.chart, CHART_HEIGHT);
                ui.add_space(20.0);

                self.preset_selector(ui, &mut events);
                ui.add_space(10.0);
                self.sliders(ui, &mut events);
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    if ui.button("Reset to Default").clicked() {
                        events.push(ControlEvent::ResetPressed);
                    }
                    if ui.button("Export PNG").clicked() {
                        export_request = Some(ExportFormat::Png);
                    }
                    if ui.button("Export SVG").clicked() {
                        export_request = Some(ExportFormat::Svg);
                    }
                    let mode = match self.output.mode {
                        Mode::PresetDriven => "preset values",
                        Mode::ManualOverride => "manual values",
                    };
                    ui.label(egui::RichText::new(mode).weak());
                });

                if let Some(notice) = &self.notice {
                    ui.label(notice.as_str());
                }
                if let Some(error) = &self.error {
                    ui.colored_label(egui::Color32::from_rgb(220, 122, 95), error.as_str());
                }
            });
        });

        self.dispatch(&events);
        if let Some(format) = export_request {
            self.export(format);
        }
    }
}
