//! The player boundary.
//!
//! Strategies receive a state together with its reachable plays and return
//! one of them. The human agent is the exception: it picks one single-step
//! move at a time and refuses compound-play selection.

use tracing::debug;

use crate::error::AgentError;
use crate::game_state::GameState;
use crate::plays::Play;
use crate::types::Move;

pub trait Agent: Send {
    /// Picks one of `plays`, which are the reachable plays of `state`.
    fn choose_play<'a>(&mut self, state: &GameState, plays: &'a [Play])
    -> Result<&'a Play, AgentError>;

    /// Picks one of `moves`, the legal single-step moves of `state`.
    ///
    /// Compound-play agents answer with the first move of the play they
    /// would choose for the whole turn.
    fn choose_move(&mut self, state: &GameState, moves: &[Move]) -> Result<Move, AgentError> {
        if moves.is_empty() {
            return Err(AgentError::NoLegalMove);
        }
        let play = self.choose_play(state, state.plays())?;
        play.moves
            .first()
            .copied()
            .filter(|m| moves.contains(m))
            .ok_or(AgentError::NoLegalMove)
    }

    fn nickname(&self) -> &str;

    /// Whether turns are resolved through [`Agent::choose_play`].
    fn plays_full_turns(&self) -> bool {
        true
    }

    /// Reset per-game state.
    fn new_game(&mut self) {}
}

/// The first play with the highest score.
pub fn best_play_by<'a, F>(plays: &'a [Play], mut score: F) -> Result<&'a Play, AgentError>
where
    F: FnMut(&Play) -> f64,
{
    let mut best: Option<(&Play, f64)> = None;
    for play in plays {
        let v = score(play);
        if best.is_none_or(|(_, b)| v > b) {
            best = Some((play, v));
        }
    }
    best.map(|(p, _)| p).ok_or(AgentError::NoReachablePlay)
}

/// Plays one turn for the side to move, whose dice must already be rolled,
/// and returns the moves made. The turn is passed to the opponent afterwards.
pub fn play_turn(state: &mut GameState, agent: &mut dyn Agent) -> Result<Vec<Move>, AgentError> {
    if agent.plays_full_turns() {
        let plays = state.plays();
        let chosen = agent.choose_play(state, plays)?;
        let moves = chosen.moves.clone();
        let next = chosen.state.clone();
        state.apply_play(&next);
        debug!(agent = agent.nickname(), moves = moves.len(), "play committed");
        return Ok(moves);
    }

    let mut made = Vec::new();
    while !state.dice().is_depleted() && !state.is_game_ended() {
        let moves = state.possible_moves().to_vec();
        if moves.is_empty() {
            break;
        }
        let mv = agent.choose_move(state, &moves)?;
        state.apply_move(mv);
        made.push(mv);
    }
    state.switch_turns();
    debug!(agent = agent.nickname(), moves = made.len(), "single moves committed");
    Ok(made)
}

/// Supplies `(src, dst)` pairs for a [`HumanAgent`]; `None` ends the input.
pub trait MoveSource: Send {
    fn next_move(&mut self, state: &GameState, legal: &[Move]) -> Option<(i8, u8)>;
}

impl<F> MoveSource for F
where
    F: FnMut(&GameState, &[Move]) -> Option<(i8, u8)> + Send,
{
    fn next_move(&mut self, state: &GameState, legal: &[Move]) -> Option<(i8, u8)> {
        self(state, legal)
    }
}

/// A player that enters single-step moves from an external source.
pub struct HumanAgent<S> {
    name: String,
    source: S,
    rejected: u32,
}

impl<S: MoveSource> HumanAgent<S> {
    pub fn new(name: impl Into<String>, source: S) -> Self {
        Self {
            name: name.into(),
            source,
            rejected: 0,
        }
    }

    /// Requests answered with a move that was not legal.
    pub fn rejected(&self) -> u32 {
        self.rejected
    }
}

impl<S: MoveSource> Agent for HumanAgent<S> {
    fn choose_play<'a>(
        &mut self,
        _state: &GameState,
        _plays: &'a [Play],
    ) -> Result<&'a Play, AgentError> {
        Err(AgentError::CompoundPlayUnsupported(self.name.clone()))
    }

    /// Asks the source again until it names a legal move or runs dry.
    fn choose_move(&mut self, state: &GameState, moves: &[Move]) -> Result<Move, AgentError> {
        if moves.is_empty() {
            return Err(AgentError::NoLegalMove);
        }
        loop {
            let (src, dst) = self
                .source
                .next_move(state, moves)
                .ok_or(AgentError::InputExhausted)?;
            if let Some(mv) = moves.iter().find(|m| m.src == src && m.dst == dst) {
                return Ok(*mv);
            }
            self.rejected += 1;
            debug!(src, dst, "illegal move entered, asking again");
        }
    }

    fn nickname(&self) -> &str {
        &self.name
    }

    fn plays_full_turns(&self) -> bool {
        false
    }

    fn new_game(&mut self) {
        self.rejected = 0;
    }
}

#[cfg(test)]
#[path = "agent_tests.rs"]
mod agent_tests;
