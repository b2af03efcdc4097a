//! Invariants checked over seeded random self-play.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use backgammon_core::{Board, CHECKERS_PER_COLOR, Color, GameState};

const FULL_SELFPLAY_ENV: &str = "FULL_SELFPLAY";
const QUICK_GAMES: u64 = 64;
const FULL_GAMES: u64 = 2_048;
const MAX_TURNS: usize = 2_000;

fn assert_consistent(board: &Board) {
    for color in Color::ALL {
        let on_points: u32 = board
            .points()
            .iter()
            .filter(|p| p.color() == Some(color))
            .map(|p| p.count() as u32)
            .sum();
        assert_eq!(
            on_points + board.bar().count(color) as u32,
            CHECKERS_PER_COLOR as u32,
            "{color} checkers not conserved\n{board}"
        );

        for p in &board.points()[1..=24] {
            let listed = board.locations(color).contains(&p.index());
            assert_eq!(listed, p.color() == Some(color), "locations out of sync\n{board}");
            assert_eq!(p.count() == 0, p.color().is_none());
        }
    }
    assert_ne!(board.point(0).color(), Some(Color::Black));
    assert_ne!(board.point(25).color(), Some(Color::White));
}

/// Plays one game choosing uniformly among reachable plays; returns the final state and turn count.
fn random_game(seed: u64) -> (GameState, usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let first = if rng.gen_bool(0.5) { Color::White } else { Color::Black };
    let mut state = GameState::new(first);

    for turn in 0..MAX_TURNS {
        if state.is_game_ended() {
            return (state, turn);
        }
        state.roll_dice_with(&mut rng);
        let mover = state.turn();
        let pips_before = state.board().pip_count(mover);

        let plays = state.plays();
        assert!(!plays.is_empty(), "no reachable play\n{state}");
        let play = plays.choose(&mut rng).unwrap().clone();
        let next = play.state;
        let dice_total: u32 = play.moves.iter().map(|m| m.distance as u32).sum();

        state.apply_play(&next);
        assert_consistent(state.board());
        assert_eq!(state.turn(), mover.other());

        let decrease = pips_before - state.board().pip_count(mover);
        assert!(decrease <= dice_total);
        if play.moves.iter().all(|m| !m.is_bear_off()) {
            assert_eq!(decrease, dice_total);
        }
    }
    panic!("game {seed} did not finish in {MAX_TURNS} turns");
}

#[test]
fn random_games_preserve_board_invariants() {
    let games = if std::env::var(FULL_SELFPLAY_ENV).is_ok() {
        FULL_GAMES
    } else {
        QUICK_GAMES
    };
    (0..games).into_par_iter().for_each(|seed| {
        let (state, turns) = random_game(seed);
        assert!(turns > 0);

        let winner = state.winner();
        assert!(state.board().did_bear_off(winner));
        assert!(!state.board().did_bear_off(winner.other()));

        let score = state.winner_score();
        assert_eq!(score.signum(), winner.win_factor());
        assert!(matches!(score.abs(), 1 | 2));
    });
}

#[test]
fn seeded_games_are_reproducible() {
    let (a, turns_a) = random_game(12_345);
    let (b, turns_b) = random_game(12_345);
    assert_eq!(turns_a, turns_b);
    assert_eq!(a.board(), b.board());
}
