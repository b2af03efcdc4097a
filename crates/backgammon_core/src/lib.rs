pub mod agent;
pub mod board;
pub mod config;
pub mod dice;
pub mod error;
pub mod eval;
pub mod features;
pub mod game_state;
pub mod movegen;
pub mod plays;
pub mod point;
pub mod search;
pub mod time_control;
pub mod types;

pub use agent::*;
pub use board::*;
pub use config::EngineConfig;
pub use dice::*;
pub use error::*;
pub use eval::*;
pub use features::{NUM_FEATURES, extract_features, extract_features_for};
pub use game_state::GameState;
pub use movegen::*;
pub use plays::*;
pub use point::*;
pub use search::*;
pub use time_control::*;
pub use types::*;
