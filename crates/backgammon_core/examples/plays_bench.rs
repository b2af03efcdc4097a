//! Play enumeration and expectimax benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example plays_bench -p backgammon_core

use backgammon_core::{
    Bar, Board, Color, Dice, Expectimax, GameState, HeuristicEvaluator, SearchConfig,
    SearchLimits,
};
use std::time::{Duration, Instant};

/// Positions as `(name, layout, white bar, black bar)`.
const TEST_POSITIONS: &[(&str, &[(u8, i8)], u8, u8)] = &[
    (
        "Start",
        &[(6, -5), (8, -3), (13, -5), (24, -2), (19, 5), (17, 3), (12, 5), (1, 2)],
        0,
        0,
    ),
    (
        "Blitz",
        &[(1, -2), (2, -2), (3, -2), (4, -2), (6, -3), (8, -2), (19, 4), (12, 5), (17, 4)],
        0,
        2,
    ),
    (
        "Priming",
        &[(4, -2), (5, -2), (6, -2), (7, -2), (8, -2), (9, -2), (24, 2), (12, 6), (19, 5)],
        0,
        0,
    ),
    (
        "Bear-off",
        &[(1, -3), (2, -3), (3, -3), (4, -2), (5, -2), (6, -2), (20, 4), (22, 6), (23, 5)],
        0,
        0,
    ),
];

const ITERATIONS: usize = 200;
const SEARCH_DEPTH: u8 = 1;

fn main() {
    println!("=== Play Enumeration Benchmark ===");
    println!("Iterations per position: {ITERATIONS} x 21 rolls");
    println!();

    let mut total_plays = 0usize;
    let mut total_time = Duration::ZERO;

    for (name, layout, white_bar, black_bar) in TEST_POSITIONS {
        let board = match Board::from_layout(layout, Bar::new(*white_bar, *black_bar)) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };
        print!("{name:.<20}");

        let start = Instant::now();
        let mut plays = 0usize;
        for _ in 0..ITERATIONS {
            for (roll, _) in Dice::weighted_rolls() {
                let mut state = GameState::from_board(board.clone(), Color::White);
                state.set_dice(Dice::rolled(roll));
                plays += state.plays().len();
            }
        }
        let elapsed = start.elapsed();
        total_plays += plays;
        total_time += elapsed;

        let per_roll = plays as f64 / (ITERATIONS * 21) as f64;
        println!(" {per_roll:>5.1} plays/roll ({elapsed:>8.3?})");
    }

    println!();
    println!("{:=<70}", "");
    println!("TOTAL: {total_plays} plays in {total_time:.3?}");

    println!();
    println!("=== Expectimax depth {SEARCH_DEPTH} ===");
    let mut state = GameState::new(Color::White);
    state.roll_dice(Some([3, 1]));
    for parallel in [false, true] {
        let search = Expectimax::new(
            Color::White,
            HeuristicEvaluator::new(Color::White),
            SearchConfig {
                depth: SEARCH_DEPTH,
                seed: Some(0),
                parallel,
                ..SearchConfig::default()
            },
        );
        let start = Instant::now();
        let result = search.search(state.plays(), &SearchLimits::depth(SEARCH_DEPTH));
        println!(
            "parallel={parallel:<5} best={:?} value={:.4} nodes={} ({:.3?})",
            result.best,
            result.value,
            result.nodes,
            start.elapsed()
        );
    }
}
