//! Game orchestration: configuration, frame pacing and the [`Game`] state
//! that turns actions into frames.
//!
//! Nothing here touches the terminal. The binary owns the event loop and the
//! renderer; this crate only needs a [`GameConfig`] and an asset store.

pub mod clock;
pub mod config;
pub mod game;

pub use tui_builder_core as core;
pub use tui_builder_types as types;

pub use clock::FrameClock;
pub use config::{ConfigError, GameConfig, InterfaceConfig, Palette};
pub use game::{Game, RunState};
