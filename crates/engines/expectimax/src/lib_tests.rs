use super::*;
use backgammon_core::{Bar, Board, SearchConfig, play_turn};

fn quick_config(depth: u8) -> EngineConfig {
    EngineConfig {
        search: SearchConfig {
            depth,
            dice_samples: 3,
            seed: Some(21),
            ..SearchConfig::default()
        },
        ..EngineConfig::default()
    }
}

#[test]
fn expectimax_agent_returns_reachable_play() {
    let mut agent = ExpectimaxAgent::with_config(Color::White, quick_config(1));
    let mut state = GameState::new(Color::White);
    state.roll_dice(Some([6, 1]));

    let play = agent.choose_play(&state, state.plays()).unwrap();
    assert!(state.find_play(&play.state).is_some());

    let stats = agent.last_search().unwrap();
    assert_eq!(stats.depth, 1);
    assert!(stats.nodes > state.plays().len() as u64);
    assert_eq!(agent.total_nodes(), stats.nodes);
}

#[test]
fn expectimax_agent_finishes_the_game() {
    let board = Board::from_layout(&[(1, -1), (2, -1), (12, 2)], Bar::default()).unwrap();
    let mut state = GameState::from_board(board, Color::White);
    state.roll_dice(Some([2, 1]));

    let mut agent = ExpectimaxAgent::with_config(Color::White, quick_config(2));
    play_turn(&mut state, &mut agent).unwrap();
    assert_eq!(state.winner(), Color::White);
}

#[test]
fn forced_play_skips_search() {
    let layout: Vec<(u8, i8)> = (19..=24).map(|i| (i, 2)).collect();
    let board = Board::from_layout(&layout, Bar::new(1, 0)).unwrap();
    let mut state = GameState::from_board(board, Color::White);
    state.roll_dice(Some([3, 4]));

    let mut agent = ExpectimaxAgent::new(Color::White);
    let play = agent.choose_play(&state, state.plays()).unwrap();
    assert!(play.moves.is_empty());
    assert!(agent.last_search().is_none());
}

#[test]
fn new_game_clears_statistics() {
    let mut agent = ExpectimaxAgent::with_config(Color::Black, quick_config(1));
    let mut state = GameState::new(Color::Black);
    state.roll_dice(Some([4, 3]));
    agent.choose_play(&state, state.plays()).unwrap();
    assert!(agent.total_nodes() > 0);

    agent.new_game();
    assert_eq!(agent.total_nodes(), 0);
    assert!(agent.last_search().is_none());
}

#[test]
fn missing_config_file_is_an_error() {
    let err = ExpectimaxAgent::from_config_file(Color::White, "/nonexistent/expectimax.toml");
    assert!(matches!(err, Err(ConfigError::Io(_))));
}
