//! Generated prompt results and the persisted history list.
//!
//! This module provides:
//!
//! - `PromptResult`: the structured answer returned by the model
//! - `HistoryItem`: a result stamped with an id and creation time
//! - `History`: the most-recent-first list, capped at [`HISTORY_LIMIT`]
//! - `HistoryStore`: the JSON snapshot on disk
//!
//! The snapshot lives at `<data dir>/history.json` and is rewritten in full after
//! every mutation. A missing file is an empty history; so is a corrupt one.

use chrono::{DateTime, SubsecRound, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Maximum number of history entries kept
pub const HISTORY_LIMIT: usize = 10;

/// File name of the history snapshot inside the data directory
const SNAPSHOT_FILE: &str = "history.json";

/// Errors that can occur while persisting history
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Could not determine data directory")]
    NoDataDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Structured prompt returned by the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptResult {
    /// Genre, mood, instrumentation and production notes
    pub style: String,
    /// Lyrics with bracketed section markers
    pub lyrics: String,
    /// Suggested song title
    pub title: String,
    /// Short music tags
    pub tags: Vec<String>,
    /// One-line description of the song's energy
    pub vibe: String,
}

impl PromptResult {
    /// Bracketed section markers in the lyrics, in order of appearance
    /// (e.g. `["Verse", "Chorus", "Verse", "Outro"]`).
    pub fn section_markers(&self) -> Vec<&str> {
        static MARKER: OnceLock<Regex> = OnceLock::new();
        let re = MARKER.get_or_init(|| Regex::new(r"\[([^\[\]\n]+)\]").expect("valid regex"));

        re.captures_iter(&self.lyrics)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// A previously generated result kept for quick recall
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    #[serde(flatten)]
    pub result: PromptResult,
    /// Opaque unique token
    pub id: String,
    /// Creation instant, stored as Unix epoch milliseconds
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl HistoryItem {
    /// Stamp a fresh result with a new id and the current time
    pub fn new(result: PromptResult) -> Self {
        Self {
            result,
            id: uuid::Uuid::new_v4().simple().to_string(),
            // Millisecond precision so a snapshot round-trip is lossless
            timestamp: Utc::now().trunc_subsecs(3),
        }
    }

    /// Local wall-clock time for list display (e.g. "14:05")
    pub fn time_display(&self) -> String {
        self.timestamp
            .with_timezone(&chrono::Local)
            .format("%H:%M")
            .to_string()
    }
}

/// Most-recent-first list of history items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    items: Vec<HistoryItem>,
}

impl History {
    /// Build from a stored list, enforcing the cap
    pub fn from_items(mut items: Vec<HistoryItem>) -> Self {
        items.truncate(HISTORY_LIMIT);
        Self { items }
    }

    /// Insert at the front, evicting the oldest entry when full
    pub fn push(&mut self, item: HistoryItem) {
        self.items.insert(0, item);
        self.items.truncate(HISTORY_LIMIT);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn find(&self, id: &str) -> Option<&HistoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// JSON snapshot of the history list
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Get the default snapshot path
    pub fn default_path() -> Result<PathBuf, HistoryError> {
        let dirs = directories::ProjectDirs::from("com", "promptlab", "PromptLab")
            .ok_or(HistoryError::NoDataDir)?;
        Ok(dirs.data_dir().join(SNAPSHOT_FILE))
    }

    /// Open the store at the default location
    pub fn open() -> Result<Self, HistoryError> {
        Ok(Self::at(Self::default_path()?))
    }

    /// Use an explicit snapshot path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot. Missing or unreadable snapshots yield an empty history.
    pub fn load(&self) -> History {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No history snapshot at {:?}", self.path);
                return History::default();
            }
            Err(e) => {
                tracing::warn!("Failed to read history snapshot {:?}: {}", self.path, e);
                return History::default();
            }
        };

        match serde_json::from_str::<Vec<HistoryItem>>(&content) {
            Ok(items) => {
                tracing::info!("Loaded {} history items from {:?}", items.len(), self.path);
                History::from_items(items)
            }
            Err(e) => {
                tracing::warn!("Ignoring corrupt history snapshot {:?}: {}", self.path, e);
                History::default()
            }
        }
    }

    /// Replace the snapshot with the given history
    pub fn save(&self, history: &History) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(history.items())?;
        std::fs::write(&self.path, content)?;
        tracing::debug!("Saved {} history items to {:?}", history.len(), self.path);
        Ok(())
    }

    /// Delete the snapshot entirely
    pub fn remove(&self) -> Result<(), HistoryError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!("Removed history snapshot {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_result(title: &str) -> PromptResult {
        PromptResult {
            style: "90s Korean Ballad, emotional piano, orchestral, nostalgic".to_string(),
            lyrics: "[Verse]\nPetals fall\n[Chorus]\nFading away\n[Bridge]\n...\n[Outro]".to_string(),
            title: title.to_string(),
            tags: vec!["ballad".to_string(), "piano".to_string(), "90s".to_string()],
            vibe: "melancholic and nostalgic".to_string(),
        }
    }

    #[test]
    fn test_push_caps_and_evicts_oldest() {
        let mut history = History::default();
        for i in 0..HISTORY_LIMIT {
            history.push(HistoryItem::new(sample_result(&format!("song {}", i))));
        }
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.items()[HISTORY_LIMIT - 1].result.title, "song 0");

        history.push(HistoryItem::new(sample_result("newest")));
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.items()[0].result.title, "newest");
        assert_eq!(history.items()[HISTORY_LIMIT - 1].result.title, "song 1");
        assert!(history.items().iter().all(|i| i.result.title != "song 0"));
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let a = HistoryItem::new(sample_result("a"));
        let b = HistoryItem::new(sample_result("a"));
        assert_ne!(a.id, b.id);
        assert!(!a.id.is_empty());
    }

    #[test]
    fn test_section_markers() {
        let result = sample_result("t");
        assert_eq!(result.section_markers(), vec!["Verse", "Chorus", "Bridge", "Outro"]);

        let plain = PromptResult {
            lyrics: "no markers here".to_string(),
            ..sample_result("t")
        };
        assert!(plain.section_markers().is_empty());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::at(dir.path().join("nested").join(SNAPSHOT_FILE));

        let mut history = History::default();
        history.push(HistoryItem::new(sample_result("first")));
        history.push(HistoryItem::new(sample_result("second")));
        store.save(&history).unwrap();

        let loaded = store.load();
        assert_eq!(loaded, history);
        assert_eq!(loaded.items()[0].result.title, "second");
    }

    #[test]
    fn test_snapshot_is_flat_with_epoch_millis() {
        let item = HistoryItem::new(sample_result("flat"));
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["title"], "flat");
        assert_eq!(value["id"], item.id.as_str());
        assert_eq!(value["timestamp"], item.timestamp.timestamp_millis());
    }

    #[test]
    fn test_missing_and_corrupt_snapshots_are_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::at(dir.path().join(SNAPSHOT_FILE));
        assert!(store.load().is_empty());

        std::fs::write(store.path(), "{not json").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_remove_then_load_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::at(dir.path().join(SNAPSHOT_FILE));

        let mut history = History::default();
        history.push(HistoryItem::new(sample_result("gone")));
        store.save(&history).unwrap();

        store.remove().unwrap();
        assert!(!store.path().exists());
        assert!(store.load().is_empty());
        // Removing twice is fine
        store.remove().unwrap();
    }
}
