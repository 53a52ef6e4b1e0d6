use super::operation::Operation;

/// The full text after one edit, together with the edit that produced it
///
/// The empty initial state is represented by the history cursor, not by a
/// stored snapshot, so every snapshot has a producing operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    text: String,
    operation: Operation,
}

impl Snapshot {
    /// Record `text` as the result of applying `operation`
    pub fn new(text: String, operation: Operation) -> Self {
        Self { text, operation }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The edit that produced this snapshot
    pub fn operation(&self) -> &Operation {
        &self.operation
    }
}
