//! Preferences - startup configuration for the front ends.
//!
//! A single JSON file supplies the board size. Missing or unreadable
//! preferences never stop a game from starting; callers get the default.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use tui_collapse_types::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Persisted startup preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_board_size")]
    pub board_size: usize,
}

fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

impl Preferences {
    /// Conventional preferences location, relative to the working directory.
    pub const DEFAULT_PATH: &'static str = "collapse/preferences.json";

    /// Parse preferences from JSON, clamping the board size into the
    /// supported range.
    pub fn from_json(raw: &str) -> Result<Self> {
        let mut prefs: Preferences =
            serde_json::from_str(raw).context("parsing preferences JSON")?;
        prefs.board_size = prefs.board_size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE);
        Ok(prefs)
    }

    /// Load preferences from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading preferences {}", path.display()))?;
        Self::from_json(&raw)
    }

    /// Load preferences, falling back to defaults when the file is missing
    /// or unreadable. This is the entry point the front ends use.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_board_size() {
        let prefs = Preferences::from_json(r#"{"board_size": 12}"#).unwrap();
        assert_eq!(prefs.board_size, 12);
    }

    #[test]
    fn missing_field_defaults() {
        let prefs = Preferences::from_json("{}").unwrap();
        assert_eq!(prefs.board_size, DEFAULT_BOARD_SIZE);
    }

    #[test]
    fn out_of_range_sizes_are_clamped() {
        let prefs = Preferences::from_json(r#"{"board_size": 1}"#).unwrap();
        assert_eq!(prefs.board_size, MIN_BOARD_SIZE);

        let prefs = Preferences::from_json(r#"{"board_size": 400}"#).unwrap();
        assert_eq!(prefs.board_size, MAX_BOARD_SIZE);
    }

    #[test]
    fn garbage_is_an_error_but_load_or_default_recovers() {
        assert!(Preferences::from_json("not json").is_err());
        let prefs = Preferences::load_or_default("/nonexistent/prefs.json");
        assert_eq!(prefs, Preferences::default());
    }
}
