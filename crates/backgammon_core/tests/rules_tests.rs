use backgammon_core::{BAR, Bar, Board, Color, GameState};

fn rolled(layout: &[(u8, i8)], bar: Bar, turn: Color, roll: [u8; 2]) -> GameState {
    let mut state = GameState::from_board(Board::from_layout(layout, bar).unwrap(), turn);
    state.roll_dice(Some(roll));
    state
}

#[test]
fn hit_checker_must_reenter_first() {
    // White 13 hits the Black blot on 10 with the 3.
    let mut state = rolled(&[(13, -2), (10, 1), (2, 3)], Bar::default(), Color::White, [3, 5]);
    let hitting = state
        .plays()
        .iter()
        .find(|p| p.moves.iter().any(|m| m.dst == 10))
        .map(|p| p.state.clone())
        .unwrap();
    state.apply_play(&hitting);

    assert_eq!(state.board().bar().count(Color::Black), 1);
    assert!(!state.board().locations(Color::Black).contains(&10));

    state.roll_dice(Some([4, 6]));
    for play in state.plays() {
        assert_eq!(play.moves[0].src, BAR, "{:?}", play.moves);
        assert_eq!(play.state.board().bar().count(Color::Black), 0);
    }
}

#[test]
fn closed_board_forces_pass() {
    let layout: Vec<(u8, i8)> = (19..=24).map(|i| (i, 2)).collect();
    let state = rolled(&layout, Bar::new(1, 0), Color::White, [6, 6]);

    assert!(state.possible_moves().is_empty());
    let plays = state.plays();
    assert_eq!(plays.len(), 1);
    assert!(plays[0].moves.is_empty());
    assert_eq!(plays[0].state.turn(), Color::Black);
}

#[test]
fn bearing_off_race_finishes() {
    let mut state = GameState::from_board(
        Board::from_layout(&[(1, -2), (2, -2), (20, 2)], Bar::default()).unwrap(),
        Color::White,
    );
    state.roll_dice(Some([2, 2]));

    let plays = state.plays();
    assert_eq!(plays.len(), 1);
    assert!(plays[0].state.is_game_ended());
    assert_eq!(plays[0].state.winner(), Color::White);
    // Black still has two checkers out but bore some off: a single game.
    assert_eq!(plays[0].state.winner_score(), -1);
}

#[test]
fn doubles_move_one_checker_four_times() {
    let state = rolled(&[(24, -1), (1, 2)], Bar::default(), Color::White, [2, 2]);
    let plays = state.plays();

    assert_eq!(plays.len(), 1);
    let path: Vec<(i8, u8)> = plays[0].moves.iter().map(|m| (m.src, m.dst)).collect();
    assert_eq!(path, vec![(24, 22), (22, 20), (20, 18), (18, 16)]);
}
