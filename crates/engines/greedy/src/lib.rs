//! Greedy Backgammon Agents
//!
//! Each agent scores every reachable play with a static function of the
//! resulting position and takes the best one, keeping the earliest on ties.
//! No dice are looked at beyond the current roll.

use backgammon_core::{
    Agent, AgentError, Color, GameState, HeuristicEvaluator, HeuristicWeights, Play, best_play_by,
};
use tracing::trace;


fn choose<'a>(
    agent: &str,
    plays: &'a [Play],
    score: impl Fn(&GameState) -> f64,
) -> Result<&'a Play, AgentError> {
    let chosen = best_play_by(plays, |p| score(&p.state))?;
    trace!(agent, candidates = plays.len(), score = score(&chosen.state), "greedy choice");
    Ok(chosen)
}

/// Maximises the number of opposing checkers sent to the bar.
#[derive(Debug, Clone)]
pub struct HitterAgent {
    color: Color,
}

impl HitterAgent {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn score(&self, state: &GameState) -> f64 {
        state.board().bar().count(self.color.other()) as f64
    }
}

impl Agent for HitterAgent {
    fn choose_play<'a>(
        &mut self,
        _state: &GameState,
        plays: &'a [Play],
    ) -> Result<&'a Play, AgentError> {
        choose(self.nickname(), plays, |s| self.score(s))
    }

    fn nickname(&self) -> &str {
        "Hitter"
    }
}

/// Maximises the number of points held with two or more checkers.
#[derive(Debug, Clone)]
pub struct CloserAgent {
    color: Color,
}

impl CloserAgent {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn score(&self, state: &GameState) -> f64 {
        state.board().points()[1..=24]
            .iter()
            .filter(|p| p.is_block_of(self.color))
            .count() as f64
    }
}

impl Agent for CloserAgent {
    fn choose_play<'a>(
        &mut self,
        _state: &GameState,
        plays: &'a [Play],
    ) -> Result<&'a Play, AgentError> {
        choose(self.nickname(), plays, |s| self.score(s))
    }

    fn nickname(&self) -> &str {
        "Closer"
    }
}

/// Maximises the weighted positional heuristic.
#[derive(Debug, Clone)]
pub struct HeuristicAgent {
    evaluator: HeuristicEvaluator,
}

impl HeuristicAgent {
    pub fn new(color: Color) -> Self {
        Self::with_weights(color, HeuristicWeights::default())
    }

    pub fn with_weights(color: Color, weights: HeuristicWeights) -> Self {
        Self {
            evaluator: HeuristicEvaluator::with_weights(color, weights),
        }
    }
}

impl Agent for HeuristicAgent {
    fn choose_play<'a>(
        &mut self,
        _state: &GameState,
        plays: &'a [Play],
    ) -> Result<&'a Play, AgentError> {
        choose(self.nickname(), plays, |s| {
            self.evaluator.evaluate_board(s.board())
        })
    }

    fn nickname(&self) -> &str {
        "Heuristic"
    }
}
