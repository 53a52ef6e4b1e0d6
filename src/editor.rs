//! Text editor with undo/redo
//!
//! [`Editor`] is the public entry point. It validates edit requests, turns
//! them into [`Operation`]s and records them in a bounded [`History`].
//! Invalid requests never fail: they are clamped or ignored, and vacuous
//! edits never reach the history.
//!
//! The editor holds no shared state. Callers needing access from several
//! threads should wrap the whole editor in a single `Mutex`.

use crate::config::Config;
use crate::model::history::{History, HistoryInfo};
use crate::model::operation::Operation;

/// Text buffer with a linear, bounded undo/redo timeline
#[derive(Clone, Debug, Default)]
pub struct Editor {
    history: History,
}

impl Editor {
    /// Create an editor keeping up to `max_history` entries (0 selects the default)
    pub fn new(max_history: usize) -> Self {
        Self {
            history: History::with_capacity(max_history),
        }
    }

    /// Create an editor from configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.effective_max_history())
    }

    /// Current text content
    pub fn text(&self) -> &str {
        self.history.current_text()
    }

    /// Length of the current text in characters
    pub fn length(&self) -> usize {
        self.text().chars().count()
    }

    /// Insert `text` at character `position`.
    ///
    /// Positions past the end append. Empty text is ignored and records nothing.
    pub fn insert(&mut self, position: usize, text: &str) {
        if text.is_empty() {
            tracing::trace!(position, "ignored empty insert");
            return;
        }

        self.history.apply(Operation::insert(position, text));
    }

    /// Delete the characters in `start..end`.
    ///
    /// `end` is clamped to the text length. Empty, inverted or out-of-bounds
    /// ranges are ignored and record nothing.
    pub fn delete(&mut self, start: usize, end: usize) {
        if start >= end || start >= self.length() {
            tracing::trace!(start, end, "ignored empty delete");
            return;
        }

        self.history.apply(Operation::delete(start, end));
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Revert to the previous state, returns true if successful
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Move forward to the next state, returns true if successful
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    pub fn info(&self) -> HistoryInfo {
        self.history.info()
    }

    /// Read-only view of the recorded history
    pub fn history(&self) -> &History {
        &self.history
    }
}
