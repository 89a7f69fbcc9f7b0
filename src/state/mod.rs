//! Application state modules
//!
//! Grouped state structs owned by the controller and the app shell.
//! Each struct owns its related fields; poll and mutation methods report back
//! through `StateEvent` rather than touching the shell directly.

mod generation;
mod history;
mod ui;

pub use generation::{Completion, GenerationPhase, GenerationState, SubmitOrigin, failure_message};
pub use history::HistoryState;
pub use ui::{CopyFeedback, CopyTarget, UiState};

/// Events that state methods can return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateEvent {
    /// Update the status message
    StatusMessage(String),

    /// Log an error message
    LogError(String),

    /// Log an info message
    LogInfo(String),
}
