//! Engine configuration loaded from TOML.
//!
//! ```toml
//! [heuristic]
//! vulnerability = 0.5
//! terminal = 1.0
//!
//! [search]
//! depth = 2
//! dice_samples = 8
//! seed = 17
//! ```
//!
//! Every field is optional; missing ones take their defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::eval::HeuristicWeights;
use crate::search::{DISTINCT_ROLLS, SearchConfig};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub heuristic: HeuristicWeights,
    pub search: SearchConfig,
}

impl EngineConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.heuristic.is_valid() {
            return Err(ConfigError::Invalid(
                "heuristic weights must be finite and non-negative".into(),
            ));
        }
        let samples = self.search.dice_samples;
        if samples == 0 || samples > DISTINCT_ROLLS {
            return Err(ConfigError::Invalid(format!(
                "dice_samples must be within 1..={DISTINCT_ROLLS}, got {samples}"
            )));
        }
        let bound = self.search.terminal_bound;
        if !(bound.is_finite() && bound > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "terminal_bound must be positive and finite, got {bound}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
