//! Tick driver: periodic timers and the session that wires them to a game.
//!
//! The game loop owns one [`GameSession`]. Timers never touch the engine;
//! they send [`Trigger`] values over a channel that the loop drains, so all
//! engine mutation happens on the loop's task.

pub mod scheduler;
pub mod session;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use scheduler::{Scheduler, TaskHandle};
pub use session::{GameSession, Trigger};
