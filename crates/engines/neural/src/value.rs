//! Position value functions.
//!
//! Values follow one sign convention regardless of who is to move: positive
//! favours Black, negative favours White.

use std::path::Path;

use backgammon_core::{Color, GameState, NUM_FEATURES, extract_features};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("failed to read model file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse model JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("model has {got} weights, expected {expected}")]
    WrongLength { expected: usize, got: usize },
}

pub trait ValueFunction: Send + Sync {
    fn value(&self, state: &GameState) -> f64;
}

/// Pip-count race estimate, used when no trained model is loaded.
///
/// Finished games score ±1; otherwise the relative pip lead in (-1, 1).
#[derive(Debug, Clone, Copy, Default)]
pub struct PipCountValue;

impl ValueFunction for PipCountValue {
    fn value(&self, state: &GameState) -> f64 {
        if let Some(winner) = state.outcome() {
            return winner.win_factor() as f64;
        }
        let board = state.board();
        let white = board.pip_count(Color::White) as f64;
        let black = board.pip_count(Color::Black) as f64;
        (white - black) / (white + black)
    }
}

/// A linear model over the feature vector: `bias + weights . features`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearValue {
    weights: Vec<f32>,
    #[serde(default)]
    bias: f32,
}

impl LinearValue {
    pub fn new(weights: Vec<f32>, bias: f32) -> Result<Self, ModelError> {
        if weights.len() != NUM_FEATURES {
            return Err(ModelError::WrongLength {
                expected: NUM_FEATURES,
                got: weights.len(),
            });
        }
        Ok(Self { weights, bias })
    }

    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let raw: Self = serde_json::from_str(json)?;
        Self::new(raw.weights, raw.bias)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ModelError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }
}

impl ValueFunction for LinearValue {
    fn value(&self, state: &GameState) -> f64 {
        let features = extract_features(state);
        let dot: f32 = features
            .iter()
            .zip(&self.weights)
            .map(|(x, w)| x * w)
            .sum();
        (dot + self.bias) as f64
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod value_tests;
