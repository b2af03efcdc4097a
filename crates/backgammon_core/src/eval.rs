//! Positional heuristic for one perspective color.
//!
//! The 24 playable points are split into four quadrants of six, ordered so
//! that quadrant 0 is always the perspective color's home board. Each feature
//! is normalized to [0, 1] and combined with [`HeuristicWeights`].
//!
//! Terminology:
//! - Blot: a single checker alone on a point, vulnerable to a hit.
//! - Block: a point held by two or more checkers of one color.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::game_state::GameState;
use crate::types::*;

/// Weighted-blot score mapped to 0 (no blots) .. 1.
const VULNERABILITY_MAX: f64 = 15.0;
/// Seven blocks in the two nearest quadrants.
const BLOCKING_MAX: f64 = 27.0;
/// Distance of a checker on the far edge of the board.
const RUNNING_MAX: f64 = 24.0;

/// A state-to-scalar evaluation, higher is better for whoever the evaluator serves.
pub trait Evaluator: Sync {
    fn evaluate(&self, state: &GameState) -> f64;
}

/// Weights for each heuristic feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    pub vulnerability: f64,
    pub hitting: f64,
    pub blocking: f64,
    pub running: f64,
    pub bear_in: f64,
    pub bear_off: f64,
    /// Any positive weight makes finished games score ±infinity.
    pub terminal: f64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            vulnerability: 0.4,
            hitting: 0.4,
            blocking: 0.4,
            running: 0.2,
            bear_in: 0.2,
            bear_off: 0.2,
            terminal: 1.0,
        }
    }
}

impl HeuristicWeights {
    fn as_array(&self) -> [f64; 7] {
        [
            self.vulnerability,
            self.hitting,
            self.blocking,
            self.running,
            self.bear_in,
            self.bear_off,
            self.terminal,
        ]
    }

    /// True if every weight is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.as_array().iter().all(|w| w.is_finite() && *w >= 0.0)
    }
}

/// Normalized feature values before weighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicBreakdown {
    pub vulnerability: f64,
    pub hitting: f64,
    pub blocking: f64,
    pub running: f64,
    pub bear_in: f64,
    pub bear_off: f64,
}

#[derive(Debug, Clone)]
pub struct HeuristicEvaluator {
    color: Color,
    weights: HeuristicWeights,
}

impl HeuristicEvaluator {
    pub fn new(color: Color) -> Self {
        Self::with_weights(color, HeuristicWeights::default())
    }

    pub fn with_weights(color: Color, weights: HeuristicWeights) -> Self {
        Self { color, weights }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn weights(&self) -> &HeuristicWeights {
        &self.weights
    }

    /// Scores `board` for the evaluator's color.
    ///
    /// A finished game dominates everything: +infinity when the color has
    /// borne off all its checkers, -infinity when the opponent has.
    pub fn evaluate_board(&self, board: &Board) -> f64 {
        if self.weights.terminal > 0.0 {
            if board.did_bear_off(self.color) {
                return f64::INFINITY;
            }
            if board.did_bear_off(self.color.other()) {
                return f64::NEG_INFINITY;
            }
        }

        let b = self.breakdown(board);
        let w = &self.weights;
        b.vulnerability * w.vulnerability
            + b.hitting * w.hitting
            + b.blocking * w.blocking
            + b.running * w.running
            + b.bear_in * w.bear_in
            + b.bear_off * w.bear_off
    }

    pub fn breakdown(&self, board: &Board) -> HeuristicBreakdown {
        let quadrants = self.quadrants();
        let weighted = |pred: &dyn Fn(u8) -> bool| -> f64 {
            quadrants
                .iter()
                .enumerate()
                .map(|(q, range)| {
                    let n = range.clone().filter(|&i| pred(i)).count();
                    (n * (4 - q)) as f64
                })
                .sum()
        };

        let blots = weighted(&|i| board.point(i).is_blot_of(self.color));
        let blocks = weighted(&|i| board.point(i).is_block_of(self.color));

        let home_checkers: u32 = quadrants[0]
            .clone()
            .map(|i| board.point(i))
            .filter(|p| p.color() == Some(self.color))
            .map(|p| p.count() as u32)
            .sum::<u32>()
            + board.borne_off(self.color) as u32;

        HeuristicBreakdown {
            vulnerability: 1.0 - normalize(blots, 0.0, VULNERABILITY_MAX),
            hitting: normalize(board.bar().count(self.color.other()) as f64, 0.0, 15.0),
            blocking: normalize(blocks, 0.0, BLOCKING_MAX),
            running: 1.0 - normalize(self.rearmost_distance(board), 0.0, RUNNING_MAX),
            bear_in: normalize(home_checkers as f64, 0.0, 15.0),
            bear_off: normalize(board.borne_off(self.color) as f64, 0.0, 15.0),
        }
    }

    /// Point ranges of the four quadrants, home first.
    fn quadrants(&self) -> [std::ops::RangeInclusive<u8>; 4] {
        match self.color {
            Color::White => [1..=6, 7..=12, 13..=18, 19..=24],
            Color::Black => [19..=24, 13..=18, 7..=12, 1..=6],
        }
    }

    /// Pips between the least advanced checker and the tray; a checker on the bar counts as the maximum.
    fn rearmost_distance(&self, board: &Board) -> f64 {
        if board.bar().contains(self.color) {
            return RUNNING_MAX;
        }
        match board.get_furthest_point_idx(self.color) {
            Some(i) => match self.color {
                Color::White => i as f64,
                Color::Black => (25 - i) as f64,
            },
            None => 0.0,
        }
    }
}

impl Evaluator for HeuristicEvaluator {
    fn evaluate(&self, state: &GameState) -> f64 {
        self.evaluate_board(state.board())
    }
}

/// Min-max scaling into [0, 1].
fn normalize(x: f64, min: f64, max: f64) -> f64 {
    ((x - min) / (max - min)).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
