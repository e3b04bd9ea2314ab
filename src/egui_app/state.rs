//! Render state for the demo and the pure transitions between states.
//!
//! A `DemoState` is a small `Copy` value. Transitions return a new state and
//! leave the receiver untouched, so each frame renders from one consistent
//! snapshot.

use crate::config::DemoConfig;
use crate::stacking::WeightVector;

/// Which page of the tutorial is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DemoPage {
    /// Theory text and the button that opens the demo.
    #[default]
    Intro,
    /// Slider, weights and live predictions.
    Demo,
}

impl DemoPage {
    pub fn toggled(self) -> Self {
        match self {
            DemoPage::Intro => DemoPage::Demo,
            DemoPage::Demo => DemoPage::Intro,
        }
    }
}

/// Snapshot of everything the renderer needs besides static config.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemoState {
    pub page: DemoPage,
    pub sample: f64,
    pub weights: WeightVector,
}

impl Default for DemoState {
    fn default() -> Self {
        Self {
            page: DemoPage::Intro,
            sample: 0.5,
            weights: WeightVector::uniform(),
        }
    }
}

/// User intents collected from widgets during a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DemoAction {
    SetSample(f64),
    SetWeight { index: usize, value: f64 },
    ToggleDemo,
}

impl DemoState {
    /// Initial state on the intro page, seeded from config.
    pub fn from_config(config: &DemoConfig) -> Self {
        Self {
            page: DemoPage::Intro,
            sample: config.initial_sample,
            weights: config.initial_weights(),
        }
    }

    pub fn set_sample(self, sample: f64) -> Self {
        Self { sample, ..self }
    }

    /// Replace one weight. Indices past the last base model are ignored.
    pub fn set_weight(self, index: usize, value: f64) -> Self {
        Self {
            weights: self.weights.with(index, value),
            ..self
        }
    }

    pub fn toggle_demo(self) -> Self {
        Self {
            page: self.page.toggled(),
            ..self
        }
    }

    pub fn apply(self, action: DemoAction) -> Self {
        match action {
            DemoAction::SetSample(sample) => self.set_sample(sample),
            DemoAction::SetWeight { index, value } => self.set_weight(index, value),
            DemoAction::ToggleDemo => self.toggle_demo(),
        }
    }
}
