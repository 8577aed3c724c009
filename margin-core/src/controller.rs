//! Turns batches of UI control events into resolved parameters, a fresh
//! chart and the slider values the UI should display afterwards.
//!
//! A batch is everything the UI observed during one event (one frame in an
//! immediate-mode UI). Preset selection and reset both mean "copy the
//! selected preset"; a batch containing either one resolves from the preset
//! even if sliders moved in the same batch. A batch of slider changes alone
//! resolves from the sliders. The empty batch stands for the first load.

use crate::chart::{render, ChartLabels, ChartSpec};
use crate::margin::{evaluate, Grid, Parameters};
use crate::presets::PresetStore;
use crate::{MarginError, UnknownPresetError};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slider {
    AbPred,
    PrevAb,
    Fn,
    Man,
}

impl Slider {
    pub const ALL: [Slider; 4] = [Slider::AbPred, Slider::PrevAb, Slider::Fn, Slider::Man];

    pub fn label(self) -> &'static str {
        match self {
            Slider::AbPred => "Probability of Failure if Poor Input (User Error)",
            Slider::PrevAb => "Prevalence of Condition in Population",
            Slider::Fn => "Probability of Failure if Sufficient Input",
            Slider::Man => "Probability of Failure with Manual Method",
        }
    }

    pub fn get(self, params: &Parameters) -> f64 {
        match self {
            Slider::AbPred => params.p_ab_pred,
            Slider::PrevAb => params.p_prev_ab,
            Slider::Fn => params.p_fn,
            Slider::Man => params.p_man,
        }
    }

    pub fn set(self, params: &mut Parameters, value: f64) {
        let slot = match self {
            Slider::AbPred => &mut params.p_ab_pred,
            Slider::PrevAb => &mut params.p_prev_ab,
            Slider::Fn => &mut params.p_fn,
            Slider::Man => &mut params.p_man,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    PresetSelected(String),
    SliderChanged { slider: Slider, value: f64 },
    ResetPressed,
}

/// Which source wins for a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Preset,
    Manual,
}

impl Trigger {
    pub fn from_batch(events: &[ControlEvent]) -> Self {
        let preset_fired = events.iter().any(|event| {
            matches!(
                event,
                ControlEvent::PresetSelected(_) | ControlEvent::ResetPressed
            )
        });
        if preset_fired || events.is_empty() {
            Trigger::Preset
        } else {
            Trigger::Manual
        }
    }

    pub fn mode(self) -> Mode {
        match self {
            Trigger::Preset => Mode::PresetDriven,
            Trigger::Manual => Mode::ManualOverride,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    PresetDriven,
    ManualOverride,
}

/// The controls as the UI currently shows them.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPanel {
    pub preset: String,
    pub sliders: Parameters,
}

impl ControlPanel {
    pub fn apply(&mut self, event: &ControlEvent) {
        match event {
            ControlEvent::PresetSelected(name) => self.preset = name.clone(),
            ControlEvent::SliderChanged { slider, value } => {
                slider.set(&mut self.sliders, value.clamp(0.0, 1.0));
            }
            ControlEvent::ResetPressed => {}
        }
    }
}

/// Decides the authoritative parameters for a batch.
pub fn resolve(
    store: &PresetStore,
    panel: &ControlPanel,
    trigger: Trigger,
) -> Result<Parameters, UnknownPresetError> {
    match trigger {
        Trigger::Preset => Ok(store.get(&panel.preset)?.parameters),
        Trigger::Manual => Ok(panel.sliders),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControllerOutput {
    pub parameters: Parameters,
    /// Values to push back to the four slider widgets.
    pub sliders: Parameters,
    pub chart: ChartSpec,
    pub mode: Mode,
}

pub struct InteractionController {
    store: Arc<PresetStore>,
    grid: Arc<Grid>,
    panel: ControlPanel,
    mode: Mode,
}

impl InteractionController {
    /// Starts on the default preset. Store and grid must be fully built
    /// before the first event is handled.
    pub fn new(store: Arc<PresetStore>, grid: Arc<Grid>) -> Self {
        let default = store.default_preset();
        let panel = ControlPanel {
            preset: default.name.clone(),
            sliders: default.parameters,
        };
        Self {
            store,
            grid,
            panel,
            mode: Mode::PresetDriven,
        }
    }

    pub fn store(&self) -> &PresetStore {
        &self.store
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn initial(&mut self) -> Result<ControllerOutput, MarginError> {
        self.handle(&[])
    }

    /// Applies a batch atomically. On error the panel and mode are left as
    /// they were before the batch.
    pub fn handle(&mut self, events: &[ControlEvent]) -> Result<ControllerOutput, MarginError> {
        let mut panel = self.panel.clone();
        for event in events {
            panel.apply(event);
        }
        let trigger = Trigger::from_batch(events);
        let parameters = resolve(&self.store, &panel, trigger).map_err(|err| {
            log::warn!("Rejected control batch of {} event(s): {err}", events.len());
            err
        })?;
        panel.sliders = parameters;

        let curve = evaluate(&parameters, &self.grid);
        let chart = render(
            &self.grid,
            &curve,
            ChartLabels::for_preset(&panel.preset, &parameters),
        )?;

        let mode = trigger.mode();
        log::debug!(
            "Resolved {} event(s) as {mode:?} for preset '{}': {parameters:?}",
            events.len(),
            panel.preset
        );
        self.panel = panel;
        self.mode = mode;
        Ok(ControllerOutput {
            parameters,
            sliders: parameters,
            chart,
            mode,
        })
    }
}
