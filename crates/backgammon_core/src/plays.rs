//! Compound-play enumeration: every distinct way to use a dice roll.
//!
//! Single-step moves are applied recursively in every order until the dice
//! are used up, nothing is legal, or the game ends. Intermediate positions
//! are keyed by `(board, remaining pips)`; a key seen before is not expanded
//! again, which collapses transposed move orders while keeping the first
//! order found. Leaves are then filtered by the maximal-usage rule and
//! deduplicated by board, so the output order is stable for a given input.

use std::collections::HashSet;

use tracing::trace;

use crate::board::Board;
use crate::game_state::GameState;
use crate::types::Move;

/// One reachable full turn: the resulting state (turn already passed) and
/// the canonical move sequence producing it.
#[derive(Clone, Debug)]
pub struct Play {
    pub state: GameState,
    pub moves: Vec<Move>,
}

struct Leaf {
    play: Play,
    terminal: bool,
}

pub fn generate_plays(root: &GameState) -> Vec<Play> {
    let mut leaves = Vec::new();
    let mut visited = HashSet::new();
    let mut applied = Vec::with_capacity(4);
    explore(root.clone(), &mut applied, &mut visited, &mut leaves);

    let plays = select(leaves, root.dice().remaining());
    trace!(
        turn = %root.turn(),
        dice = ?root.dice().value(),
        plays = plays.len(),
        "enumerated plays"
    );
    plays
}

fn explore(
    state: GameState,
    applied: &mut Vec<Move>,
    visited: &mut HashSet<(Board, Vec<u8>)>,
    leaves: &mut Vec<Leaf>,
) {
    let finished =
        state.dice().is_depleted() || state.is_game_ended() || state.possible_moves().is_empty();
    if finished {
        let terminal = state.is_game_ended();
        let mut leaf = state;
        leaf.switch_turns();
        leaves.push(Leaf {
            play: Play {
                state: leaf,
                moves: applied.clone(),
            },
            terminal,
        });
        return;
    }

    for &mv in state.possible_moves() {
        let mut next = state.clone();
        next.apply_move(mv);

        let mut pips = next.dice().remaining().to_vec();
        pips.sort_unstable();
        if !visited.insert((next.board().clone(), pips)) {
            continue;
        }

        applied.push(mv);
        explore(next, applied, visited, leaves);
        applied.pop();
    }
}

/// Keeps the plays allowed by the usage rules, deduplicated by resulting board.
///
/// A play must use as many dice as possible. If only one die of a non-double
/// can be played, the larger must be played when it can be. Plays that end
/// the game are always allowed.
fn select(leaves: Vec<Leaf>, initial_pips: &[u8]) -> Vec<Play> {
    let full = initial_pips.len();
    let used = |leaf: &Leaf| {
        if leaf.terminal {
            full
        } else {
            leaf.play.moves.len()
        }
    };
    let max_used = leaves.iter().map(used).max().unwrap_or(0);

    let mut kept: Vec<Leaf> = leaves.into_iter().filter(|l| used(l) == max_used).collect();

    if max_used == 1 && full == 2 && initial_pips[0] != initial_pips[1] {
        let larger = initial_pips[0].max(initial_pips[1]);
        let uses_larger = |l: &Leaf| l.play.moves.first().is_some_and(|m| m.distance == larger);
        if kept.iter().any(|l| !l.terminal && uses_larger(l)) {
            kept.retain(|l| l.terminal || uses_larger(l));
        }
    }

    let mut seen = HashSet::new();
    kept.into_iter()
        .filter(|l| seen.insert(l.play.state.board().clone()))
        .map(|l| l.play)
        .collect()
}

#[cfg(test)]
#[path = "plays_tests.rs"]
mod plays_tests;
