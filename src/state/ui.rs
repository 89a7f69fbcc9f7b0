//! UI-related application state

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::ui::theme::Theme;

/// How long the "Copied" acknowledgment stays visible
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// Copyable blocks of a result card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyTarget {
    Style,
    Lyrics,
}

/// Per-block "Copied" acknowledgments, each with its own expiry
#[derive(Debug, Default)]
pub struct CopyFeedback {
    expiries: HashMap<CopyTarget, Instant>,
}

impl CopyFeedback {
    /// Start (or restart) the acknowledgment for a block
    pub fn mark(&mut self, target: CopyTarget, now: Instant) {
        self.expiries.insert(target, now + COPY_FEEDBACK_DURATION);
    }

    pub fn is_active(&self, target: CopyTarget, now: Instant) -> bool {
        self.expiries.get(&target).is_some_and(|expiry| now < *expiry)
    }

    /// Drop expired acknowledgments; returns time until the next one expires
    pub fn prune(&mut self, now: Instant) -> Option<Duration> {
        self.expiries.retain(|_, expiry| now < *expiry);
        self.expiries.values().map(|expiry| *expiry - now).min()
    }
}

/// UI-related state
pub struct UiState {
    /// Current theme
    pub current_theme: Theme,
    /// Whether theme needs to be applied
    pub theme_dirty: bool,
    /// Copy acknowledgments on the result card
    pub copy_feedback: CopyFeedback,
    /// Whether to show the settings window
    pub show_settings: bool,
    /// Whether to show the About dialog
    pub show_about_dialog: bool,
}

impl UiState {
    /// Create a new UiState with the given theme
    pub fn new(theme: Theme) -> Self {
        Self {
            current_theme: theme,
            theme_dirty: true, // Apply theme on first frame
            copy_feedback: CopyFeedback::default(),
            show_settings: false,
            show_about_dialog: false,
        }
    }
}
