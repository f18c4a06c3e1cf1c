//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`tui_collapse_types::GameAction`].
//! Collapse is turn-based, so there is no auto-repeat handling; one key
//! press is one action.

pub mod map;

pub use tui_collapse_types as types;

pub use map::{handle_key_event, should_quit};
