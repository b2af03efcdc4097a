//! Depth-limited expectimax over compound plays.
//!
//! Decision layers alternate with chance layers. At a chance layer every roll
//! is expanded with its probability weight (2/36 for each non-double, 1/36 for
//! each double), or a seeded random subset of rolls when `dice_samples` is
//! below 21, renormalized over the sampled weight. At a decision layer the
//! side to move picks the reachable state that is best for it: the searching
//! color maximizes, the opponent minimizes.
//!
//! Finished games are not expanded. Leaf values come from an [`Evaluator`]
//! and are clamped to `±terminal_bound`, so a decided game never produces
//! infinities inside the weighted sums.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, trace};

use crate::dice::Dice;
use crate::eval::Evaluator;
use crate::game_state::GameState;
use crate::plays::Play;
use crate::time_control::SearchLimits;
use crate::types::Color;

/// Number of distinct rolls.
pub const DISTINCT_ROLLS: usize = 21;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Chance layers searched beyond the candidate; 0 is greedy.
    pub depth: u8,
    /// Rolls expanded per chance node, 1..=21.
    pub dice_samples: usize,
    /// Seed for roll sampling; a random seed is drawn when unset.
    pub seed: Option<u64>,
    /// Score root candidates on the rayon pool.
    pub parallel: bool,
    /// Magnitude leaf values are clamped to.
    pub terminal_bound: f64,
    /// Wall-clock budget per decision in milliseconds.
    pub move_time_ms: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 1,
            dice_samples: DISTINCT_ROLLS,
            seed: None,
            parallel: false,
            terminal_bound: 1e6,
            move_time_ms: None,
        }
    }
}

impl SearchConfig {
    pub fn limits(&self) -> SearchLimits {
        match self.move_time_ms {
            Some(ms) => SearchLimits::depth_and_time(self.depth, Duration::from_millis(ms)),
            None => SearchLimits::depth(self.depth),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Index of the chosen play; `None` only for an empty candidate list.
    pub best: Option<usize>,
    /// Expected value of the chosen play from the searching color's side.
    pub value: f64,
    pub depth: u8,
    pub nodes: u64,
    /// Whether the time limit cut the root loop short.
    pub stopped: bool,
}

pub struct Expectimax<E> {
    color: Color,
    evaluator: E,
    config: SearchConfig,
}

impl<E: Evaluator> Expectimax<E> {
    /// `evaluator` must score positions from `color`'s point of view.
    pub fn new(color: Color, evaluator: E, config: SearchConfig) -> Self {
        Self {
            color,
            evaluator,
            config,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Scores every candidate and returns the best one; ties keep the earliest.
    ///
    /// The time limit is checked before each candidate. Candidates skipped
    /// after the limit expires are ignored; if none was scored the first
    /// candidate is returned with its static value.
    pub fn search(&self, plays: &[Play], limits: &SearchLimits) -> SearchResult {
        limits.start();
        let depth = limits.depth;

        if plays.is_empty() {
            return SearchResult {
                best: None,
                value: 0.0,
                depth,
                nodes: 0,
                stopped: false,
            };
        }

        let base_seed = self.config.seed.unwrap_or_else(rand::random);
        let tc = &limits.time_control;
        let score = |(i, play): (usize, &Play)| -> Option<(f64, u64)> {
            if tc.check_time() {
                return None;
            }
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(i as u64));
            let mut nodes = 0;
            let value = self.value(&play.state, depth, &mut rng, &mut nodes);
            trace!(candidate = i, value, nodes, "scored candidate");
            Some((value, nodes))
        };

        let scored: Vec<Option<(f64, u64)>> = if self.config.parallel {
            plays.par_iter().enumerate().map(score).collect()
        } else {
            plays.iter().enumerate().map(score).collect()
        };

        let stopped = scored.iter().any(Option::is_none);
        let nodes: u64 = scored.iter().flatten().map(|(_, n)| n).sum();

        let mut best: Option<(usize, f64)> = None;
        for (i, s) in scored.iter().enumerate() {
            if let Some((v, _)) = s
                && best.is_none_or(|(_, b)| *v > b)
            {
                best = Some((i, *v));
            }
        }
        let (best, value) = best.unwrap_or_else(|| (0, self.leaf(&plays[0].state)));

        debug!(
            color = %self.color,
            candidates = plays.len(),
            best,
            value,
            nodes,
            stopped,
            elapsed_ms = tc.elapsed().as_millis() as u64,
            "expectimax search finished"
        );

        SearchResult {
            best: Some(best),
            value,
            depth,
            nodes,
            stopped,
        }
    }

    /// Expected value of `state` looking `depth` chance layers ahead.
    pub fn value<R: Rng>(&self, state: &GameState, depth: u8, rng: &mut R, nodes: &mut u64) -> f64 {
        *nodes += 1;
        if depth == 0 || state.is_game_ended() {
            return self.leaf(state);
        }

        let rolls = self.sample_rolls(rng);
        let total: u32 = rolls.iter().map(|(_, w)| w).sum();

        let mut expected = 0.0;
        for (roll, weight) in rolls {
            let mut node = state.clone();
            node.set_dice(Dice::rolled(roll));
            let maximize = node.turn() == self.color;

            let mut best = if maximize {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
            for play in node.plays() {
                let v = self.value(&play.state, depth - 1, rng, nodes);
                best = if maximize { best.max(v) } else { best.min(v) };
            }
            expected += weight as f64 * best;
        }
        expected / total as f64
    }

    fn leaf(&self, state: &GameState) -> f64 {
        let bound = self.config.terminal_bound;
        self.evaluator.evaluate(state).clamp(-bound, bound)
    }

    fn sample_rolls<R: Rng>(&self, rng: &mut R) -> Vec<([u8; 2], u32)> {
        let rolls = Dice::weighted_rolls();
        if self.config.dice_samples >= DISTINCT_ROLLS {
            return rolls;
        }
        let mut sampled: Vec<_> = rolls
            .choose_multiple(rng, self.config.dice_samples.max(1))
            .copied()
            .collect();
        sampled.sort_unstable();
        sampled
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
