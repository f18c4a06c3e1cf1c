//! Hall of fame - append-only score ledger.
//!
//! Scores are appended as one JSON object per line, so the file is a full
//! history; the displayed hall is computed on read. Lower scores are better
//! (the score is the move count), ties break on name.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use tui_collapse_types::{HALL_SIZE, MAX_NAME_LEN};

/// One recorded score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: u32,
    pub name: String,
}

/// The persisted score ledger.
pub struct HallOfFame {
    path: PathBuf,
}

impl HallOfFame {
    /// Ledger at the conventional location, `collapse/halloffame.jsonl`
    /// relative to the working directory.
    pub fn open_default() -> Self {
        Self::new("collapse/halloffame.jsonl")
    }

    /// Ledger at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one score. Creates the parent directory and file on first use.
    /// Names longer than the limit are truncated.
    pub fn add(&self, name: &str, score: u32) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("creating score directory {}", dir.display()))?;
            }
        }

        let name: String = name.chars().take(MAX_NAME_LEN).collect();
        let entry = ScoreEntry { score, name };
        let line = serde_json::to_string(&entry)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening score file {}", self.path.display()))?;
        writeln!(file, "{line}")?;
        Ok(())
    }

    /// The best scores, sorted by (score ascending, name ascending), at most
    /// [`HALL_SIZE`] of them. A missing ledger reads as empty; unparsable
    /// lines are skipped rather than poisoning the whole hall.
    pub fn top(&self) -> Result<Vec<ScoreEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("reading score file {}", self.path.display()))?;

        let mut entries: Vec<ScoreEntry> = raw
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect();

        entries.sort_by(|a, b| a.score.cmp(&b.score).then_with(|| a.name.cmp(&b.name)));
        entries.truncate(HALL_SIZE);
        Ok(entries)
    }

    /// The hall formatted for display: right-aligned score, then name,
    /// one entry per line.
    pub fn render(&self) -> Result<String> {
        Ok(render_entries(&self.top()?))
    }
}

/// Format hall entries as display lines.
pub fn render_entries(entries: &[ScoreEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!("{:>10}    {}\n", entry.score, entry.name));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_aligns_scores() {
        let entries = vec![
            ScoreEntry {
                score: 9,
                name: "ada".into(),
            },
            ScoreEntry {
                score: 123,
                name: "bob".into(),
            },
        ];
        let text = render_entries(&entries);
        assert_eq!(text, "         9    ada\n       123    bob\n");
    }

    #[test]
    fn render_empty_hall_is_empty() {
        assert_eq!(render_entries(&[]), "");
    }
}
