//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key and mouse events into [`crate::types::GameAction`].
//! Mouse positions are translated from terminal cells to window pixels, one
//! cell covering [`crate::types::PIXELS_PER_ROW`] pixel rows.

pub mod map;

pub use tui_builder_types as types;

pub use map::{cell_to_pixel, handle_event, handle_key_event, handle_mouse_event, should_quit};
