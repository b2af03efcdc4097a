//! Feature extraction for value-function input.
//!
//! A position becomes a flat vector of 198 values:
//! - 0..96: White, four slots per point 1..=24
//! - 96: White checkers on the bar / 2
//! - 97: White checkers borne off / 15
//! - 98..194: Black, four slots per point 1..=24
//! - 194: Black checkers on the bar / 2
//! - 195: Black checkers borne off / 15
//! - 196, 197: side to move, one-hot (White, Black)
//!
//! The four slots of a point are 1.0 for at least one, two and three
//! checkers, then `(count - 3) / 2` for the overflow. Only the owning color's
//! slots are set.

use crate::board::Board;
use crate::game_state::GameState;
use crate::types::*;

/// Slots used per point and color.
pub const SLOTS_PER_POINT: usize = 4;

/// Offset of each color's block within the vector.
const COLOR_BASE: [usize; 2] = [0, 98];

pub const NUM_FEATURES: usize = 198;

/// Features of `state` with its own side to move.
pub fn extract_features(state: &GameState) -> Vec<f32> {
    extract_features_for(state.board(), state.turn())
}

/// Features of `board` with `turn` encoded as the side to move.
pub fn extract_features_for(board: &Board, turn: Color) -> Vec<f32> {
    let mut features = vec![0.0f32; NUM_FEATURES];

    for point in &board.points()[1..=24] {
        let Some(color) = point.color() else {
            continue;
        };
        let count = point.count();
        let slot = COLOR_BASE[color.idx()] + (point.index() as usize - 1) * SLOTS_PER_POINT;

        features[slot] = 1.0;
        if count > 1 {
            features[slot + 1] = 1.0;
        }
        if count > 2 {
            features[slot + 2] = 1.0;
        }
        if count > 3 {
            features[slot + 3] = (count - 3) as f32 / 2.0;
        }
    }

    for color in Color::ALL {
        let tail = COLOR_BASE[color.idx()] + 24 * SLOTS_PER_POINT;
        features[tail] = board.bar().count(color) as f32 / 2.0;
        features[tail + 1] = board.borne_off(color) as f32 / CHECKERS_PER_COLOR as f32;
    }

    features[196 + turn.idx()] = 1.0;
    features
}

#[cfg(test)]
#[path = "features_tests.rs"]
mod features_tests;
