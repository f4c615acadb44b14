//! Terminal front end.
//!
//! Renders the window bitmap into a character framebuffer and flushes it to a
//! real terminal. It avoids widget/layout libraries and draws straight into a
//! framebuffer that is diffed against the previous frame.
//!
//! - [`view`]: bitmap to half-block cells (pure)
//! - [`renderer`]: raw mode, mouse capture and diff flushing

pub mod fb;
pub mod renderer;
pub mod view;

pub use tui_builder_core as core;
pub use tui_builder_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{Viewport, WindowView};
