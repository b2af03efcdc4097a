use super::*;
use crate::point::Bar;

fn board(layout: &[(u8, i8)], bar: Bar) -> Board {
    Board::from_layout(layout, bar).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_startpos_breakdown() {
    let b = HeuristicEvaluator::new(Color::White).breakdown(&Board::startpos());
    assert_eq!(b.vulnerability, 1.0);
    assert_eq!(b.hitting, 0.0);
    // Blocks on 6, 8, 13 and 24 weigh 4 + 3 + 2 + 1.
    assert!(close(b.blocking, 10.0 / 27.0));
    assert_eq!(b.running, 0.0);
    assert!(close(b.bear_in, 5.0 / 15.0));
    assert_eq!(b.bear_off, 0.0);
}

#[test]
fn test_startpos_is_symmetric() {
    let start = Board::startpos();
    let white = HeuristicEvaluator::new(Color::White).evaluate_board(&start);
    let black = HeuristicEvaluator::new(Color::Black).evaluate_board(&start);
    assert!(close(white, black));
}

#[test]
fn test_blots_weigh_more_near_home() {
    let eval = HeuristicEvaluator::new(Color::Black);
    let home = eval.breakdown(&board(&[(22, 1), (10, -2)], Bar::default()));
    let away = eval.breakdown(&board(&[(3, 1), (10, -2)], Bar::default()));

    assert!(close(home.vulnerability, 1.0 - 4.0 / 15.0));
    assert!(close(away.vulnerability, 1.0 - 1.0 / 15.0));
}

#[test]
fn test_features_stay_normalized() {
    // Eight White blots in the home quadrants overflow the blot scale.
    let layout: Vec<(u8, i8)> = (1..=8).map(|i| (i, -1)).chain([(20, 2)]).collect();
    let b = HeuristicEvaluator::new(Color::White).breakdown(&board(&layout, Bar::new(0, 3)));

    for v in [b.vulnerability, b.hitting, b.blocking, b.running, b.bear_in, b.bear_off] {
        assert!((0.0..=1.0).contains(&v), "{b:?}");
    }
    assert_eq!(b.vulnerability, 0.0);
    assert!(close(b.hitting, 3.0 / 15.0));
}

#[test]
fn test_checker_on_bar_is_furthest_back() {
    let eval = HeuristicEvaluator::new(Color::White);
    let b = eval.breakdown(&board(&[(2, -1), (20, 1)], Bar::new(1, 0)));
    assert_eq!(b.running, 0.0);

    let b = eval.breakdown(&board(&[(6, -1), (20, 1)], Bar::default()));
    assert!(close(b.running, 1.0 - 6.0 / 24.0));
}

#[test]
fn test_borne_off_counts_toward_bear_in() {
    let eval = HeuristicEvaluator::new(Color::Black);
    let b = eval.breakdown(&board(&[(20, 2), (12, 3), (5, -2)], Bar::default()));
    // 10 in the tray plus 2 at home.
    assert!(close(b.bear_in, 12.0 / 15.0));
    assert!(close(b.bear_off, 10.0 / 15.0));
}

#[test]
fn test_finished_games_dominate() {
    let won = board(&[(12, 3)], Bar::default());
    assert_eq!(
        HeuristicEvaluator::new(Color::White).evaluate_board(&won),
        f64::INFINITY
    );
    assert_eq!(
        HeuristicEvaluator::new(Color::Black).evaluate_board(&won),
        f64::NEG_INFINITY
    );

    let weights = HeuristicWeights {
        terminal: 0.0,
        ..HeuristicWeights::default()
    };
    let value = HeuristicEvaluator::with_weights(Color::Black, weights).evaluate_board(&won);
    assert!(value.is_finite());
}

#[test]
fn test_weights_scale_features() {
    let weights = HeuristicWeights {
        vulnerability: 0.0,
        hitting: 0.0,
        blocking: 0.0,
        running: 0.0,
        bear_in: 0.0,
        bear_off: 1.0,
        terminal: 1.0,
    };
    let eval = HeuristicEvaluator::with_weights(Color::White, weights);
    let value = eval.evaluate_board(&board(&[(3, -5), (20, 2)], Bar::default()));
    assert!(close(value, 10.0 / 15.0));
}

#[test]
fn test_weight_validation() {
    assert!(HeuristicWeights::default().is_valid());
    let negative = HeuristicWeights {
        running: -0.1,
        ..HeuristicWeights::default()
    };
    assert!(!negative.is_valid());
    let nan = HeuristicWeights {
        hitting: f64::NAN,
        ..HeuristicWeights::default()
    };
    assert!(!nan.is_valid());
}

#[test]
fn test_evaluator_reads_state_board() {
    let state = GameState::new(Color::Black);
    let eval = HeuristicEvaluator::new(Color::White);
    assert_eq!(eval.evaluate(&state), eval.evaluate_board(state.board()));
}
