//! Collapse (workspace facade crate).
//!
//! This package keeps a stable `tui_collapse::{core,input,store,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_collapse_core as core;
pub use tui_collapse_input as input;
pub use tui_collapse_store as store;
pub use tui_collapse_term as term;
pub use tui_collapse_types as types;
