//! History-related application state

use crate::history::{History, HistoryItem, HistoryStore, PromptResult};
use crate::state::StateEvent;

/// In-memory history plus the snapshot it is flushed to
pub struct HistoryState {
    history: History,
    /// None when no data directory is available; history is then session-only
    store: Option<HistoryStore>,
}

impl HistoryState {
    /// Rehydrate from the store once at startup
    pub fn load(store: Option<HistoryStore>) -> Self {
        let history = store.as_ref().map(HistoryStore::load).unwrap_or_default();
        Self { history, store }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn find(&self, id: &str) -> Option<&HistoryItem> {
        self.history.find(id)
    }

    /// Prepend a fresh result and flush the snapshot
    pub fn record(&mut self, result: PromptResult) -> Vec<StateEvent> {
        let item = HistoryItem::new(result);
        let mut events = vec![StateEvent::LogInfo(format!(
            "Recorded \"{}\" in history ({})",
            item.result.title, item.id
        ))];
        self.history.push(item);

        if let Some(ref store) = self.store {
            if let Err(e) = store.save(&self.history) {
                events.push(StateEvent::LogError(format!("Failed to save history: {}", e)));
                events.push(StateEvent::StatusMessage("History could not be saved".to_string()));
            }
        }
        events
    }

    /// Empty the history and delete the snapshot
    pub fn clear(&mut self) -> Vec<StateEvent> {
        self.history.clear();
        let mut events = vec![StateEvent::StatusMessage("History cleared".to_string())];

        if let Some(ref store) = self.store {
            if let Err(e) = store.remove() {
                events.push(StateEvent::LogError(format!(
                    "Failed to delete history snapshot: {}",
                    e
                )));
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::tests::sample_result;

    #[test]
    fn test_failed_save_keeps_in_memory_history() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let store = HistoryStore::at(blocker.join("history.json"));

        let mut state = HistoryState::load(Some(store));
        let events = state.record(sample_result("unsaved"));

        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history().items()[0].result.title, "unsaved");
        assert!(events.iter().any(|e| matches!(e, StateEvent::LogError(_))));
        assert!(events.contains(&StateEvent::StatusMessage(
            "History could not be saved".to_string()
        )));
    }

    #[test]
    fn test_record_without_store_is_session_only() {
        let mut state = HistoryState::load(None);
        let events = state.record(sample_result("memory"));
        assert_eq!(state.history().len(), 1);
        assert!(!events.iter().any(|e| matches!(e, StateEvent::LogError(_))));
    }
}
