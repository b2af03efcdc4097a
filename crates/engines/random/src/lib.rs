//! Random Backgammon Agent
//!
//! Picks one of the reachable plays uniformly at random. Useful for:
//! - Baseline comparisons (any real strategy should beat this comfortably)
//! - Driving self-play through odd positions to stress play enumeration

use backgammon_core::{Agent, AgentError, GameState, Play};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;


/// An agent with no evaluation at all.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: StdRng,
    turns: u64,
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomAgent {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Reproducible choices for tests and seeded self-play.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self { rng, turns: 0 }
    }

    /// Turns played since the last `new_game`.
    pub fn turns(&self) -> u64 {
        self.turns
    }
}

impl Agent for RandomAgent {
    fn choose_play<'a>(
        &mut self,
        _state: &GameState,
        plays: &'a [Play],
    ) -> Result<&'a Play, AgentError> {
        self.turns += 1;
        plays.choose(&mut self.rng).ok_or(AgentError::NoReachablePlay)
    }

    fn nickname(&self) -> &str {
        "Random"
    }

    fn new_game(&mut self) {
        self.turns = 0;
    }
}
