//! Persistence module - the score ledger and preferences file.
//!
//! Everything here lives outside the board engine: the engine never touches
//! storage, and storage errors never reach the engine. Both front ends call
//! into this crate at startup (preferences) and after a won game (scores).

pub mod prefs;
pub mod scores;

pub use tui_collapse_types as types;

pub use prefs::Preferences;
pub use scores::{render_entries, HallOfFame, ScoreEntry};
