//! Bounded linear undo/redo history
//!
//! The history is a single timeline of snapshots with a cursor pointing at the
//! visible one. Undo and redo only move the cursor. Committing an edit while
//! the cursor is behind the tail first discards everything after the cursor
//! (branch truncation), then appends, then drops the oldest snapshot if the
//! timeline has grown past its capacity.
//!
//! The cursor may also sit *before* the first snapshot, which is the empty
//! initial state. Undoing from the first snapshot lands there, so a fresh
//! editor and a fully undone one look the same to callers.

use std::collections::VecDeque;
use std::fmt;

use super::operation::Operation;
use super::snapshot::Snapshot;

/// Capacity used when none (or zero) is configured
pub const DEFAULT_MAX_HISTORY: usize = 100;

/// Read-only summary of the history state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryInfo {
    /// Index of the visible snapshot, `None` for the empty initial state
    pub position: Option<usize>,

    /// Number of snapshots currently retained
    pub total: usize,

    pub can_undo: bool,
    pub can_redo: bool,
}

impl HistoryInfo {
    /// Cursor as a signed index, with `-1` for the empty initial state
    pub fn position_index(&self) -> isize {
        self.position.map_or(-1, |idx| idx as isize)
    }
}

impl fmt::Display for HistoryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position={} total={} can_undo={} can_redo={}",
            self.position_index(),
            self.total,
            self.can_undo,
            self.can_redo
        )
    }
}

/// Snapshot timeline with a movable cursor
///
/// At most `max_history + 1` snapshots are kept: the capacity counts history
/// entries while the empty initial state is not counted.
#[derive(Clone, Debug)]
pub struct History {
    /// Snapshots in the order they were committed
    snapshots: VecDeque<Snapshot>,

    /// Index of the visible snapshot, `None` before the first one
    position: Option<usize>,

    max_history: usize,
}

impl History {
    /// Create a new history with the default capacity (100)
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_HISTORY)
    }

    /// Create a new history keeping up to `max_history` entries.
    ///
    /// Zero selects [`DEFAULT_MAX_HISTORY`]; it never means "no history".
    pub fn with_capacity(max_history: usize) -> Self {
        let max_history = if max_history == 0 {
            DEFAULT_MAX_HISTORY
        } else {
            max_history
        };

        Self {
            snapshots: VecDeque::with_capacity(max_history.min(DEFAULT_MAX_HISTORY) + 1),
            position: None,
            max_history,
        }
    }

    /// Apply `operation` to the current text and commit the result.
    ///
    /// Any redo-able snapshots are discarded first. Returns the new text.
    pub fn apply(&mut self, operation: Operation) -> &str {
        let text = operation.apply(self.current_text());

        let keep = self.position.map_or(0, |idx| idx + 1);
        if keep < self.snapshots.len() {
            let discarded = self.snapshots.len() - keep;
            self.snapshots.truncate(keep);
            tracing::debug!(discarded, "discarded redo history");
        }

        tracing::debug!(%operation, "committed edit");
        self.snapshots.push_back(Snapshot::new(text, operation));

        let mut position = self.snapshots.len() - 1;
        if position > self.max_history {
            self.snapshots.pop_front();
            position -= 1;
            tracing::debug!(max_history = self.max_history, "evicted oldest snapshot");
        }
        self.position = Some(position);

        tracing::trace!(position, total = self.snapshots.len(), "history advanced");
        self.current_text()
    }

    /// Text of the visible snapshot, empty before the first one
    pub fn current_text(&self) -> &str {
        self.current().map_or("", Snapshot::text)
    }

    /// The visible snapshot, if any
    pub fn current(&self) -> Option<&Snapshot> {
        self.position.and_then(|idx| self.snapshots.get(idx))
    }

    pub fn can_undo(&self) -> bool {
        self.position.is_some()
    }

    /// Step the cursor back by one.
    ///
    /// Undoing from the first snapshot returns to the empty initial state.
    /// Returns false, with no state change, when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.position {
            None => {
                tracing::trace!("nothing to undo");
                false
            }
            Some(idx) => {
                self.position = idx.checked_sub(1);
                tracing::debug!(position = self.info().position_index(), "undo");
                true
            }
        }
    }

    pub fn can_redo(&self) -> bool {
        self.next_index() < self.snapshots.len()
    }

    /// Step the cursor forward by one.
    ///
    /// Returns false, with no state change, when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            tracing::trace!("nothing to redo");
            return false;
        }

        let idx = self.next_index();
        self.position = Some(idx);
        tracing::debug!(position = idx, "redo");
        true
    }

    pub fn info(&self) -> HistoryInfo {
        HistoryInfo {
            position: self.position,
            total: self.snapshots.len(),
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }

    /// Retained snapshots, oldest first
    pub fn snapshots(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }

    /// Configured capacity in history entries
    pub fn max_history(&self) -> usize {
        self.max_history
    }

    /// Get the number of snapshots in history
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if history is empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    fn next_index(&self) -> usize {
        self.position.map_or(0, |idx| idx + 1)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
