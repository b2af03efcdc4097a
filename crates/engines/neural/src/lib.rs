//! Learned Value Backgammon Agent
//!
//! Picks the reachable play whose resulting position a [`ValueFunction`]
//! rates best for the agent's color: Black takes the highest value, White
//! the lowest. Training happens elsewhere; this crate only consumes weights.
//!
//! # Model Loading
//!
//! Linear models are loaded from versioned subdirectories:
//! ```text
//! models/
//!   v001/
//!     weights.json
//!   v002/
//!     weights.json
//! ```

mod value;

pub use value::{LinearValue, ModelError, PipCountValue, ValueFunction};

use std::path::{Path, PathBuf};

use backgammon_core::{Agent, AgentError, Color, GameState, Play, best_play_by};
use tracing::debug;


pub struct TdAgent {
    color: Color,
    value: Box<dyn ValueFunction>,
    model_path: Option<PathBuf>,
    version: String,
    name: String,
}

impl TdAgent {
    /// An agent without a trained model, falling back to the pip-count race estimate.
    pub fn new(color: Color) -> Self {
        Self::with_value(color, "pips-v0", Box::new(PipCountValue))
    }

    pub fn with_value(color: Color, version: &str, value: Box<dyn ValueFunction>) -> Self {
        Self {
            color,
            value,
            model_path: None,
            version: version.to_string(),
            name: format!("TD-{version}"),
        }
    }

    /// Loads `<models_dir>/<version>/weights.json`.
    pub fn with_model(color: Color, models_dir: &str, version: &str) -> Result<Self, ModelError> {
        let model_path = PathBuf::from(models_dir).join(version).join("weights.json");
        let model = LinearValue::load(&model_path)?;
        debug!(path = %model_path.display(), "loaded linear value model");

        let mut agent = Self::with_value(color, version, Box::new(model));
        agent.model_path = Some(model_path);
        Ok(agent)
    }

    pub fn model_version(&self) -> &str {
        &self.version
    }

    pub fn model_path(&self) -> Option<&Path> {
        self.model_path.as_deref()
    }

    /// Value of `state`, positive favouring Black.
    pub fn evaluate(&self, state: &GameState) -> f64 {
        self.value.value(state)
    }
}

impl Agent for TdAgent {
    fn choose_play<'a>(
        &mut self,
        _state: &GameState,
        plays: &'a [Play],
    ) -> Result<&'a Play, AgentError> {
        let sign = self.color.win_factor() as f64;
        best_play_by(plays, |p| sign * self.value.value(&p.state))
    }

    fn nickname(&self) -> &str {
        &self.name
    }
}
