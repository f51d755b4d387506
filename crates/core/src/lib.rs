//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It does not touch terminals, timers, or input devices, making it:
//!
//! - **Deterministic**: Same seed places apples identically
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can be driven by any scheduler and drawn by any renderer
//!
//! # Module Structure
//!
//! - [`board`]: W×H grid of [`types::CellState`] cells
//! - [`snake`]: ordered body segments (tail first, head last)
//! - [`engine`]: [`GameEngine`], the phase machine, tick update and apple spawning
//! - [`config`]: [`GameConfig`] with file and environment layering
//! - [`rng`]: LCG used for apple placement
//!
//! # Game Rules
//!
//! - **Tick**: the snake advances one cell in its current direction
//! - **Growth**: a tick whose head lands on an apple keeps the tail, so the snake grows by one
//! - **Speed**: every apple multiplies the tick interval by 0.8, down to a 50ms floor
//! - **Steering**: at most one direction change per tick, never straight back
//! - **Crash**: leaving the board or hitting the body ends the run until restart
//! - **Apples**: spawned periodically on random empty cells; several may be on the board
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GameEngine;
//! use tui_snake_types::{Direction, GamePhase, Pos};
//!
//! let mut game = GameEngine::seeded(12345);
//! game.start();
//! game.set_direction(Direction::Right);
//!
//! for _ in 0..3 {
//!     game.tick();
//! }
//!
//! assert_eq!(game.snake().head(), Pos::new(13, 10));
//! assert_eq!(game.phase(), GamePhase::Playing);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod rng;
pub mod snake;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use engine::{ChangedCells, GameEngine, TickOutcome};
pub use rng::SimpleRng;
pub use snake::Snake;
