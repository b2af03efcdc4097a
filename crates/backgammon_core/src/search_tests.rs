use super::*;
use crate::board::Board;
use crate::eval::HeuristicEvaluator;
use crate::point::Bar;

struct Constant(f64);

impl Evaluator for Constant {
    fn evaluate(&self, _state: &GameState) -> f64 {
        self.0
    }
}

fn config(depth: u8, dice_samples: usize, seed: u64) -> SearchConfig {
    SearchConfig {
        depth,
        dice_samples,
        seed: Some(seed),
        ..SearchConfig::default()
    }
}

fn near_win() -> GameState {
    let board = Board::from_layout(&[(1, -1), (2, -1), (12, 2)], Bar::default()).unwrap();
    let mut state = GameState::from_board(board, Color::White);
    state.roll_dice(Some([2, 1]));
    state
}

#[test]
fn test_forced_win_is_chosen_at_every_depth() {
    let state = near_win();
    let plays = state.plays();
    assert_eq!(plays.len(), 2);

    let mut previous = f64::NEG_INFINITY;
    for depth in 0..=2 {
        let search = Expectimax::new(
            Color::White,
            HeuristicEvaluator::new(Color::White),
            config(depth, DISTINCT_ROLLS, 1),
        );
        let result = search.search(plays, &SearchLimits::depth(depth));
        let best = result.best.unwrap();

        assert!(plays[best].state.is_game_ended());
        assert_eq!(result.value, 1e6);
        assert!(result.value >= previous);
        previous = result.value;
    }
}

#[test]
fn test_losing_leaf_is_clamped() {
    let board = Board::from_layout(&[(24, 1), (3, -1)], Bar::default()).unwrap();
    let mut state = GameState::from_board(board, Color::Black);
    state.roll_dice(Some([6, 5]));
    let plays = state.plays();
    assert!(plays.iter().all(|p| p.state.is_game_ended()));

    // White evaluates Black's finished game as a loss.
    let search = Expectimax::new(
        Color::White,
        HeuristicEvaluator::new(Color::White),
        SearchConfig {
            terminal_bound: 50.0,
            ..config(1, DISTINCT_ROLLS, 3)
        },
    );
    let result = search.search(plays, &SearchLimits::depth(1));
    assert_eq!(result.value, -50.0);
}

#[test]
fn test_constant_evaluation_survives_weighting() {
    let mut state = GameState::new(Color::White);
    state.roll_dice(Some([6, 4]));

    for samples in [1, 4, DISTINCT_ROLLS] {
        let search = Expectimax::new(Color::White, Constant(0.25), config(1, samples, 11));
        let result = search.search(state.plays(), &SearchLimits::depth(1));
        assert!((result.value - 0.25).abs() < 1e-12, "samples = {samples}");
        assert_eq!(result.best, Some(0));
    }
}

#[test]
fn test_seeded_search_is_reproducible() {
    let mut state = GameState::new(Color::White);
    state.roll_dice(Some([3, 1]));

    let run = || {
        let search = Expectimax::new(
            Color::White,
            HeuristicEvaluator::new(Color::White),
            config(1, 3, 42),
        );
        search.search(state.plays(), &SearchLimits::depth(1))
    };
    let a = run();
    let b = run();
    assert_eq!(a.best, b.best);
    assert_eq!(a.value, b.value);
    assert_eq!(a.nodes, b.nodes);
    assert!(!a.stopped);
}

#[test]
fn test_parallel_matches_sequential() {
    let mut state = GameState::new(Color::Black);
    state.roll_dice(Some([5, 2]));

    let sequential = Expectimax::new(
        Color::Black,
        HeuristicEvaluator::new(Color::Black),
        config(1, 2, 9),
    );
    let parallel = Expectimax::new(
        Color::Black,
        HeuristicEvaluator::new(Color::Black),
        SearchConfig {
            parallel: true,
            ..config(1, 2, 9)
        },
    );

    let a = sequential.search(state.plays(), &SearchLimits::depth(1));
    let b = parallel.search(state.plays(), &SearchLimits::depth(1));
    assert_eq!(a.best, b.best);
    assert_eq!(a.value, b.value);
    assert_eq!(a.nodes, b.nodes);
}

#[test]
fn test_depth_zero_is_greedy() {
    let mut state = GameState::new(Color::White);
    state.roll_dice(Some([3, 1]));
    let plays = state.plays();
    let eval = HeuristicEvaluator::new(Color::White);

    let search = Expectimax::new(Color::White, eval.clone(), config(0, DISTINCT_ROLLS, 0));
    let result = search.search(plays, &SearchLimits::depth(0));

    let greedy = plays
        .iter()
        .map(|p| eval.evaluate(&p.state))
        .fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(result.value, greedy);
    assert_eq!(result.nodes, plays.len() as u64);
}

#[test]
fn test_expired_clock_returns_first_candidate() {
    let mut state = GameState::new(Color::White);
    state.roll_dice(Some([6, 6]));

    let search = Expectimax::new(Color::White, Constant(1.0), config(2, DISTINCT_ROLLS, 5));
    let limits = SearchLimits::depth_and_time(2, Duration::ZERO);
    let result = search.search(state.plays(), &limits);

    assert!(result.stopped);
    assert_eq!(result.best, Some(0));
    assert_eq!(result.nodes, 0);
}

#[test]
fn test_no_candidates() {
    let search = Expectimax::new(Color::White, Constant(0.0), SearchConfig::default());
    let result = search.search(&[], &SearchLimits::default());
    assert_eq!(result.best, None);
}

#[test]
fn test_config_limits_carry_move_time() {
    let cfg = SearchConfig {
        depth: 2,
        move_time_ms: Some(250),
        ..SearchConfig::default()
    };
    let limits = cfg.limits();
    assert_eq!(limits.depth, 2);
    assert_eq!(limits.move_time, Some(Duration::from_millis(250)));
}
