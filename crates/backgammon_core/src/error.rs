//! Recoverable errors.
//!
//! Broken rule contracts (applying an illegal move, removing a checker that is
//! not there) are panics, not variants here.

use thiserror::Error;

/// Rejected board layouts passed to [`crate::Board::from_layout`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("point index {0} is outside 0..=25")]
    IndexOutOfRange(u8),
    #[error("point {0} listed more than once")]
    DuplicatePoint(u8),
    #[error("{color} checkers placed on the opponent's tray (point {index})")]
    WrongTray { color: crate::Color, index: u8 },
    #[error("{color} has {count} checkers; at most 15 allowed")]
    TooManyCheckers { color: crate::Color, count: u32 },
}

/// Errors returned by [`crate::Agent`] implementations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    #[error("{0} can only choose single moves")]
    CompoundPlayUnsupported(String),
    #[error("no reachable play was offered")]
    NoReachablePlay,
    #[error("no legal move was offered")]
    NoLegalMove,
    #[error("move source ran out of input")]
    InputExhausted,
}

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
