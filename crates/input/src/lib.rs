//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] intents.
//! Raw key codes stop here; the engine only ever sees intents.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
