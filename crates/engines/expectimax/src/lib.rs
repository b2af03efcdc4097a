//! Expectimax Backgammon Agent
//!
//! Scores every reachable play by looking ahead over the opponent's dice and
//! replies, with the positional heuristic at the leaves. Depth, roll
//! sampling, parallelism and the time budget all come from [`EngineConfig`].

use std::path::Path;

use backgammon_core::{
    Agent, AgentError, Color, ConfigError, EngineConfig, Expectimax, GameState,
    HeuristicEvaluator, Play, SearchResult,
};
use tracing::debug;

#[cfg(test)]
mod lib_tests;

pub struct ExpectimaxAgent {
    search: Expectimax<HeuristicEvaluator>,
    last: Option<SearchResult>,
    total_nodes: u64,
}

impl ExpectimaxAgent {
    /// Default weights, one chance layer, every roll expanded.
    pub fn new(color: Color) -> Self {
        Self::with_config(color, EngineConfig::default())
    }

    pub fn with_config(color: Color, config: EngineConfig) -> Self {
        let evaluator = HeuristicEvaluator::with_weights(color, config.heuristic);
        Self {
            search: Expectimax::new(color, evaluator, config.search),
            last: None,
            total_nodes: 0,
        }
    }

    pub fn from_config_file<P: AsRef<Path>>(color: Color, path: P) -> Result<Self, ConfigError> {
        Ok(Self::with_config(color, EngineConfig::load(path)?))
    }

    pub fn color(&self) -> Color {
        self.search.color()
    }

    /// Statistics of the most recent decision.
    pub fn last_search(&self) -> Option<&SearchResult> {
        self.last.as_ref()
    }

    /// Nodes visited since the last `new_game`.
    pub fn total_nodes(&self) -> u64 {
        self.total_nodes
    }
}

impl Agent for ExpectimaxAgent {
    fn choose_play<'a>(
        &mut self,
        state: &GameState,
        plays: &'a [Play],
    ) -> Result<&'a Play, AgentError> {
        // A forced play needs no search.
        if let [only] = plays {
            return Ok(only);
        }

        let limits = self.search.config().limits();
        let result = self.search.search(plays, &limits);
        self.total_nodes += result.nodes;
        if result.stopped {
            debug!(turn = %state.turn(), nodes = result.nodes, "search cut short by time limit");
        }

        let chosen = result.best.and_then(|i| plays.get(i));
        self.last = Some(result);
        chosen.ok_or(AgentError::NoReachablePlay)
    }

    fn nickname(&self) -> &str {
        "Expectimax"
    }

    fn new_game(&mut self) {
        self.last = None;
        self.total_nodes = 0;
    }
}
