//! Presentation settings for the demo, stored as TOML under the app root.
//!
//! Only the starting point and widget ranges are configurable; values the user
//! changes while the demo runs are never written back.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::stacking::{BASE_MODEL_COUNT, WeightVector};

mod io;

pub use io::{CONFIG_FILE_NAME, config_path, load_from_path, load_or_default, save_to_path};

const MAX_DISPLAY_DECIMALS: usize = 10;
const SNAP_SCALE: f64 = 1e9;

/// Settings that shape the initial demo state and the input widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Sample shown when the demo first opens.
    pub initial_sample: f64,
    /// Weights shown when the demo first opens.
    pub initial_weights: [f64; BASE_MODEL_COUNT],
    /// Inclusive `[min, max]` bounds of the sample slider.
    pub sample_range: [f64; 2],
    pub sample_step: f64,
    /// Inclusive `[min, max]` bounds of each weight input.
    pub weight_range: [f64; 2],
    pub weight_step: f64,
    /// Number of decimals used when displaying predictions.
    pub display_decimals: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            initial_sample: 0.5,
            initial_weights: WeightVector::uniform().0,
            sample_range: [0.0, 1.0],
            sample_step: 0.01,
            weight_range: [0.0, 2.0],
            weight_step: 0.1,
            display_decimals: 2,
        }
    }
}

impl DemoConfig {
    /// Replace unusable values with defaults and pull initial values into range.
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();
        if !valid_range(self.sample_range) {
            self.sample_range = defaults.sample_range;
        }
        if !valid_step(self.sample_step) {
            self.sample_step = defaults.sample_step;
        }
        if !valid_range(self.weight_range) {
            self.weight_range = defaults.weight_range;
        }
        if !valid_step(self.weight_step) {
            self.weight_step = defaults.weight_step;
        }
        if self.display_decimals > MAX_DISPLAY_DECIMALS {
            self.display_decimals = defaults.display_decimals;
        }
        self.initial_sample = if self.initial_sample.is_finite() {
            clamp_to(self.initial_sample, self.sample_range)
        } else {
            clamp_to(defaults.initial_sample, self.sample_range)
        };
        if self.initial_weights.iter().any(|w| !w.is_finite()) {
            self.initial_weights = defaults.initial_weights;
        }
        let weight_range = self.weight_range;
        self.initial_weights = self.initial_weights.map(|w| clamp_to(w, weight_range));
        self
    }

    pub fn initial_weights(&self) -> WeightVector {
        WeightVector(self.initial_weights)
    }

    /// Round `value` to the nearest `weight_step` above the range minimum, clamped to the range.
    pub fn snap_weight(&self, value: f64) -> f64 {
        let [min, _] = self.weight_range;
        if !value.is_finite() {
            return min;
        }
        let steps = ((value - min) / self.weight_step).round();
        // Drop float noise such as 0.30000000000000004.
        let snapped = ((min + steps * self.weight_step) * SNAP_SCALE).round() / SNAP_SCALE;
        clamp_to(snapped, self.weight_range)
    }
}

fn valid_range([min, max]: [f64; 2]) -> bool {
    min.is_finite() && max.is_finite() && min < max
}

fn valid_step(step: f64) -> bool {
    step.is_finite() && step > 0.0
}

fn clamp_to(value: f64, [min, max]: [f64; 2]) -> f64 {
    value.clamp(min, max)
}

/// Errors that may occur while loading or saving the demo configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to create the config directory.
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to read the config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write the config file.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse TOML config.
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Failed to serialize config to TOML.
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
    /// No usable config directory found.
    #[error("No suitable config directory found")]
    NoConfigDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_widgets() {
        let config = DemoConfig::default();
        assert_eq!(config.initial_sample, 0.5);
        assert_eq!(config.initial_weights(), WeightVector::new(1.0, 1.0, 1.0));
        assert_eq!(config.sample_range, [0.0, 1.0]);
        assert_eq!(config.weight_range, [0.0, 2.0]);
        assert_eq!(config.display_decimals, 2);
    }

    #[test]
    fn normalized_restores_inverted_ranges_and_bad_steps() {
        let config = DemoConfig {
            sample_range: [1.0, 0.0],
            sample_step: 0.0,
            weight_range: [f64::NAN, 2.0],
            weight_step: -0.1,
            display_decimals: 42,
            ..DemoConfig::default()
        }
        .normalized();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn normalized_clamps_initial_values_into_range() {
        let config = DemoConfig {
            initial_sample: 3.0,
            initial_weights: [-1.0, 0.5, 9.0],
            ..DemoConfig::default()
        }
        .normalized();
        assert_eq!(config.initial_sample, 1.0);
        assert_eq!(config.initial_weights, [0.0, 0.5, 2.0]);
    }

    #[test]
    fn snap_weight_rounds_to_step_and_clamps() {
        let config = DemoConfig::default();
        assert_eq!(config.snap_weight(0.34), 0.3);
        assert_eq!(config.snap_weight(0.36), 0.4);
        assert_eq!(config.snap_weight(1.0), 1.0);
        assert_eq!(config.snap_weight(2.7), 2.0);
        assert_eq!(config.snap_weight(-0.2), 0.0);
        assert_eq!(config.snap_weight(f64::NAN), 0.0);
    }

    #[test]
    fn snap_weight_follows_custom_step_and_offset_range() {
        let config = DemoConfig {
            weight_range: [0.5, 3.0],
            weight_step: 0.25,
            ..DemoConfig::default()
        };
        assert_eq!(config.snap_weight(0.8), 0.75);
        assert_eq!(config.snap_weight(0.9), 1.0);
    }

    #[test]
    fn normalized_keeps_zero_weight_start() {
        let config = DemoConfig {
            initial_weights: [0.0, 0.0, 0.0],
            ..DemoConfig::default()
        }
        .normalized();
        assert_eq!(config.initial_weights, [0.0, 0.0, 0.0]);
    }
}
