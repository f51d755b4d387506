//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the engine's board is drawn into a
//! plain framebuffer, which is then flushed to the terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Redraw only what changed between frames
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
