//! TUI Builder (workspace facade crate).
//!
//! Re-exports `tui_builder::{core,engine,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_builder_core as core;
pub use tui_builder_engine as engine;
pub use tui_builder_input as input;
pub use tui_builder_term as term;
pub use tui_builder_types as types;
