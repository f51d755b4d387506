//! Integration tests for the game lifecycle

use crossterm::event::{KeyCode, KeyEvent};
use tui_snake::core::{GameConfig, GameEngine, TickOutcome};
use tui_snake::input::handle_key_event;
use tui_snake::types::{CellState, Collision, Direction, GameAction, GamePhase, Pos};

#[test]
fn test_game_lifecycle() {
    let mut game = GameEngine::seeded(12345);
    assert_eq!(game.phase(), GamePhase::Idle);

    game.start();
    assert_eq!(game.phase(), GamePhase::Playing);

    // Heading up from the centre of a 20x20 board: 10 free cells, then the wall.
    for _ in 0..10 {
        assert!(!game.tick().crashed());
    }
    assert_eq!(game.snake().head(), Pos::new(10, 0));
    assert_eq!(game.tick(), TickOutcome::Crashed(Collision::Wall));
    assert_eq!(game.phase(), GamePhase::Crashed);

    assert!(game.restart());
    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(game.snake().head(), Pos::new(10, 10));
}

#[test]
fn test_three_ticks_right_on_default_board() {
    let mut game = GameEngine::seeded(1);
    game.start();
    assert_eq!(game.snake().head(), Pos::new(10, 10));

    game.set_direction(Direction::Right);
    for _ in 0..3 {
        game.tick();
    }

    assert_eq!(game.snake().head(), Pos::new(13, 10));
    assert_eq!(game.snake().len(), 1);
}

#[test]
fn test_apple_on_next_cell() {
    let mut game = GameEngine::seeded(1);
    game.start();
    game.set_direction(Direction::Right);

    let tail = game.snake().tail();
    let before_ms = game.tick_ms();
    let next = game.snake().head().step(Direction::Right);
    assert!(game.place_apple(next));

    let outcome = game.tick();

    assert!(outcome.ate_apple());
    assert_eq!(game.snake().len(), 2);
    assert_eq!(game.snake().tail(), tail);
    assert!((game.tick_ms() - before_ms * 0.8).abs() < 1e-9);
    assert_eq!(game.cell(next), Some(CellState::Snake));
}

#[test]
fn test_left_wall_at_x_minus_one() {
    let mut game = GameEngine::with_snake(
        GameConfig::seeded(1),
        [Pos::new(1, 4), Pos::new(0, 4)],
        Direction::Left,
    )
    .unwrap();

    assert_eq!(game.tick(), TickOutcome::Crashed(Collision::Wall));
    assert_eq!(game.phase(), GamePhase::Crashed);
}

#[test]
fn test_keys_drive_engine_through_actions() {
    let mut game = GameEngine::seeded(3);

    let press = |code: KeyCode| handle_key_event(KeyEvent::from(code));

    assert!(game.apply_action(press(KeyCode::Enter).unwrap()));
    assert_eq!(game.phase(), GamePhase::Playing);

    // Down is the reverse of the starting heading.
    assert!(!game.apply_action(press(KeyCode::Down).unwrap()));
    assert!(game.apply_action(press(KeyCode::Left).unwrap()));
    assert_eq!(game.direction(), Direction::Left);

    assert_eq!(press(KeyCode::Char('x')), None);
}

#[test]
fn test_custom_board_size_centres_snake() {
    let config = GameConfig {
        grid_width: 7,
        grid_height: 5,
        seed: Some(2),
        ..GameConfig::default()
    };
    let game = GameEngine::new(config).unwrap();
    assert_eq!(game.snake().head(), Pos::new(3, 2));
    assert_eq!(game.board().len(), 35);
}

#[test]
fn test_start_action_ignored_while_playing() {
    let mut game = GameEngine::seeded(3);
    game.apply_action(GameAction::Start);
    game.tick();
    let head = game.snake().head();

    assert!(!game.apply_action(GameAction::Start));
    assert_eq!(game.snake().head(), head);
}
