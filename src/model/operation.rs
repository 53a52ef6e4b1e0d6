//! Reversible text operations
//!
//! An [`Operation`] describes a single edit and knows how to apply itself to a
//! string. Positions are counted in `char`s, never bytes, so multi-byte
//! characters occupy exactly one position.
//!
//! Application is total: out-of-range positions are clamped instead of
//! rejected, the same way an edit widget treats a caret past the end of line.

use std::fmt;

/// A single text transformation recorded in the history
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Insert `text` before the character at `position`
    Insert { position: usize, text: String },
    /// Remove the characters in `start..end` (end exclusive)
    Delete { start: usize, end: usize },
}

impl Operation {
    /// Create a new insert operation
    pub fn insert(position: usize, text: impl Into<String>) -> Self {
        Self::Insert {
            position,
            text: text.into(),
        }
    }

    /// Create a new delete operation
    pub fn delete(start: usize, end: usize) -> Self {
        Self::Delete { start, end }
    }

    /// Apply this operation to `current`, producing the resulting text.
    ///
    /// - Insert clamps `position` to the character length of `current`, so a
    ///   position past the end appends.
    /// - Delete clamps `end` to the character length; an empty or inverted
    ///   range leaves the text unchanged.
    pub fn apply(&self, current: &str) -> String {
        match self {
            Self::Insert { position, text } => {
                if text.is_empty() {
                    return current.to_string();
                }
                let at = byte_offset(current, *position);
                let mut result = String::with_capacity(current.len() + text.len());
                result.push_str(&current[..at]);
                result.push_str(text);
                result.push_str(&current[at..]);
                result
            }
            Self::Delete { start, end } => {
                let end = (*end).min(current.chars().count());
                if *start >= end {
                    return current.to_string();
                }
                let from = byte_offset(current, *start);
                let to = byte_offset(current, end);
                let mut result = String::with_capacity(current.len() - (to - from));
                result.push_str(&current[..from]);
                result.push_str(&current[to..]);
                result
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert { position, text } => fmt_insert(f, text, position),
            Self::Delete { start, end } => fmt_delete(f, *start, *end),
        }
    }
}

/// Write an insert description; shared with script transcripts
pub(crate) fn fmt_insert(
    f: &mut fmt::Formatter<'_>,
    text: &str,
    position: &dyn fmt::Display,
) -> fmt::Result {
    write!(f, "insert {text:?} at {position}")
}

/// Write a delete description; shared with script transcripts
pub(crate) fn fmt_delete(f: &mut fmt::Formatter<'_>, start: usize, end: usize) -> fmt::Result {
    write!(f, "delete [{start}, {end})")
}

/// Convert a character position into a byte offset, clamping to the end.
fn byte_offset(text: &str, position: usize) -> usize {
    text.char_indices()
        .nth(position)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}
