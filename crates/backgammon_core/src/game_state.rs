use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use rand::Rng;

use crate::board::Board;
use crate::dice::Dice;
use crate::movegen::legal_moves;
use crate::plays::{Play, generate_plays};
use crate::types::*;

/// Turn owner, board and dice, plus two lazily computed derived sets.
///
/// Identity is value identity over `(turn, board)`: two states with the same
/// side to move and the same checker layout are equal and hash alike,
/// whatever the dice or the move order that produced them. Reachable-play
/// deduplication and [`GameState::apply_play`] both rely on this.
///
/// Every mutation clears both caches together.
pub struct GameState {
    board: Board,
    dice: Dice,
    turn: Color,
    moves: OnceLock<Vec<Move>>,
    plays: OnceLock<Vec<Play>>,
}

impl Clone for GameState {
    /// Fully independent copy. The legal-move cache is carried over; the
    /// reachable-play cache is not, since it can be large and branches rarely need it.
    fn clone(&self) -> Self {
        let moves = OnceLock::new();
        if let Some(m) = self.moves.get() {
            let _ = moves.set(m.clone());
        }
        Self {
            board: self.board.clone(),
            dice: self.dice.clone(),
            turn: self.turn,
            moves,
            plays: OnceLock::new(),
        }
    }
}

impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.turn == other.turn && self.board == other.board
    }
}

impl Eq for GameState {}

impl Hash for GameState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.turn.hash(state);
        self.board.hash(state);
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("turn", &self.turn)
            .field("dice", &self.dice)
            .field("board", &self.board)
            .finish()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "Turn: {}", self.turn)?;
        if let Some([a, b]) = self.dice.value() {
            write!(f, "  Dice: [{a}, {b}]  Moves left: {:?}", self.dice.remaining())?;
        }
        Ok(())
    }
}

impl GameState {
    /// Starting position with `starting` to move and no dice rolled.
    pub fn new(starting: Color) -> Self {
        Self::from_board(Board::startpos(), starting)
    }

    pub fn from_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            dice: Dice::new(),
            turn,
            moves: OnceLock::new(),
            plays: OnceLock::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    fn invalidate(&mut self) {
        self.moves = OnceLock::new();
        self.plays = OnceLock::new();
    }

    /// Rolls the dice for the side to move; `outcome` fixes the roll.
    pub fn roll_dice(&mut self, outcome: Option<[u8; 2]>) {
        self.dice.roll(outcome);
        self.invalidate();
    }

    pub fn roll_dice_with<R: Rng>(&mut self, rng: &mut R) {
        self.dice.roll_with(rng);
        self.invalidate();
    }

    pub fn set_dice(&mut self, dice: Dice) {
        self.dice = dice;
        self.invalidate();
    }

    /// Legal single-step moves for the side to move with the unused pips.
    ///
    /// Empty means the side to move must pass; that is a normal state.
    pub fn possible_moves(&self) -> &[Move] {
        self.moves
            .get_or_init(|| legal_moves(&self.board, &self.dice, self.turn))
    }

    /// Every distinct full-turn outcome of the current dice, with the
    /// canonical move sequence leading to it. Each resulting state has the
    /// turn already passed to the opponent.
    pub fn plays(&self) -> &[Play] {
        self.plays.get_or_init(|| generate_plays(self))
    }

    pub fn reachable_states(&self) -> impl Iterator<Item = &GameState> {
        self.plays().iter().map(|p| &p.state)
    }

    /// The play whose resulting state equals `state`, if reachable.
    pub fn find_play(&self, state: &GameState) -> Option<&Play> {
        self.plays().iter().find(|p| p.state == *state)
    }

    pub fn find_move(&self, src: i8, dst: u8) -> Option<Move> {
        self.possible_moves()
            .iter()
            .copied()
            .find(|m| m.src == src && m.dst == dst)
    }

    /// Plays one legal move and consumes its pip. Panics on an illegal move.
    pub fn apply_move(&mut self, mv: Move) {
        assert!(
            self.possible_moves().contains(&mv),
            "move {mv} is not among the legal moves"
        );
        self.board.apply_move(mv);
        self.dice.use_move(mv.distance);
        self.invalidate();
    }

    /// Commits a full turn. `next` must be one of the reachable states.
    pub fn apply_play(&mut self, next: &GameState) {
        assert!(
            self.plays().iter().any(|p| p.state == *next),
            "state is not reachable with the current dice"
        );
        self.board = next.board.clone();
        self.dice = next.dice.clone();
        self.turn = next.turn;
        self.invalidate();
    }

    pub fn switch_turns(&mut self) {
        self.turn = self.turn.other();
        self.invalidate();
    }

    pub fn is_game_ended(&self) -> bool {
        self.outcome().is_some()
    }

    /// The winner, or `None` while the game is running.
    pub fn outcome(&self) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|&c| self.board.did_bear_off(c))
    }

    /// Panics if the game has not ended.
    pub fn winner(&self) -> Color {
        match self.outcome() {
            Some(c) => c,
            None => panic!("winner queried before the game ended"),
        }
    }

    /// Signed game value: 1 for a single game, 2 for a gammon, positive when
    /// Black wins. Panics if the game has not ended.
    pub fn winner_score(&self) -> i32 {
        let winner = self.winner();
        let loser = winner.other();
        let points = if self.board.count_active_checkers(loser) == CHECKERS_PER_COLOR {
            2
        } else {
            1
        };
        winner.win_factor() * points
    }
}

#[cfg(test)]
#[path = "game_state_tests.rs"]
mod game_state_tests;
