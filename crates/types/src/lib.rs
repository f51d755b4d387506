//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Coordinates
//!
//! - `(0, 0)` is the top-left cell
//! - `x` grows to the right, `y` grows downward
//! - Coordinates are signed so a head that left the board (e.g. `x = -1`) is representable
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `START_TICK_MS` | 500 | Tick interval at the start of a run |
//! | `APPLE_INTERVAL_MS` | 5000 | Period of the apple spawner |
//! | `EATING_MULTIPLIER` | 0.8 | Tick interval multiplier per apple eaten |
//! | `MIN_TICK_MS` | 50 | Floor for the tick interval |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GameAction, Pos, GRID_WIDTH, GRID_HEIGHT};
//!
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! assert_eq!(Pos::new(10, 10).step(Direction::Right), Pos::new(11, 10));
//!
//! let action = GameAction::from_str("left").unwrap();
//! assert_eq!(action.direction(), Some(Direction::Left));
//!
//! assert_eq!(GRID_WIDTH, 20);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Board width in cells (20 columns)
pub const GRID_WIDTH: u16 = 20;

/// Board height in cells (20 rows)
pub const GRID_HEIGHT: u16 = 20;

/// Tick interval when a run starts or restarts
pub const START_TICK_MS: f64 = 500.0;

/// Apple spawner period
pub const APPLE_INTERVAL_MS: u64 = 5000;

/// Tick interval multiplier applied each time an apple is eaten
pub const EATING_MULTIPLIER: f64 = 0.8;

/// Floor for the tick interval; repeated speed-ups stop here
pub const MIN_TICK_MS: f64 = 50.0;

/// Heading of a fresh snake
pub const START_DIRECTION: Direction = Direction::Up;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn original_timing_defaults() {
        assert_eq!(START_TICK_MS, 500.0);
        assert_eq!(APPLE_INTERVAL_MS, 5000);
        assert_eq!(EATING_MULTIPLIER, 0.8);
        assert!(MIN_TICK_MS < START_TICK_MS);
    }

    #[test]
    fn opposites_are_symmetric() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn step_then_opposite_step_returns_home() {
        let origin = Pos::new(3, 7);
        for d in Direction::ALL {
            assert_eq!(origin.step(d).step(d.opposite()), origin);
        }
    }

    #[test]
    fn action_parsing_roundtrips_names() {
        for a in [
            GameAction::Up,
            GameAction::Down,
            GameAction::Left,
            GameAction::Right,
            GameAction::Start,
        ] {
            assert_eq!(GameAction::from_str(a.as_str()), Some(a));
        }
        assert_eq!(GameAction::from_str("jump"), None);
    }
}

/// A board coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub x: i16,
    pub y: i16,
}

impl Pos {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighbouring coordinate one cell away in `dir`
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::{Direction, Pos};
    ///
    /// assert_eq!(Pos::new(0, 5).step(Direction::Left), Pos::new(-1, 5));
    /// assert_eq!(Pos::new(4, 0).step(Direction::Up), Pos::new(4, -1));
    /// ```
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Snake heading
///
/// The snake can never turn straight back onto its own neck, so a direction
/// equal to [`Direction::opposite`] of the current one is always rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction pointing the other way
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// assert_eq!(Direction::Down.opposite(), Direction::Up);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit offset `(dx, dy)` in screen coordinates
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// State of a single board cell
///
/// [`CellState::as_str`] gives the visual class a renderer assigns to the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    Snake,
    Apple,
}

impl CellState {
    /// Visual class name (`"empty"`, `"snake"` or `"apple"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            CellState::Empty => "empty",
            CellState::Snake => "snake",
            CellState::Apple => "apple",
        }
    }
}

/// Lifecycle of a run
///
/// ```text
/// Idle -> Playing -> Crashed -> Playing (restart) -> Crashed -> ...
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// Board set up, waiting for the start input
    #[default]
    Idle,
    /// Ticks advance the snake
    Playing,
    /// The snake hit a wall or itself; waiting for restart
    Crashed,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::Playing => "playing",
            GamePhase::Crashed => "crashed",
        }
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collision {
    /// The head left the board
    Wall,
    /// The head ran into the snake's own body
    SelfHit,
}

/// Player intents produced by the input layer
///
/// These are the only inputs the engine understands; raw key codes never
/// reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Steer up
    Up,
    /// Steer down
    Down,
    /// Steer left
    Left,
    /// Steer right
    Right,
    /// Start from idle, or restart after a crash
    Start,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("UP"), Some(GameAction::Up));
    /// assert_eq!(GameAction::from_str("start"), Some(GameAction::Start));
    /// assert_eq!(GameAction::from_str("pause"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(GameAction::Up),
            "down" => Some(GameAction::Down),
            "left" => Some(GameAction::Left),
            "right" => Some(GameAction::Right),
            "start" => Some(GameAction::Start),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Up => "up",
            GameAction::Down => "down",
            GameAction::Left => "left",
            GameAction::Right => "right",
            GameAction::Start => "start",
        }
    }

    /// The steering direction carried by this action, if any
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::Up => Some(Direction::Up),
            GameAction::Down => Some(Direction::Down),
            GameAction::Left => Some(Direction::Left),
            GameAction::Right => Some(Direction::Right),
            GameAction::Start => None,
        }
    }
}
