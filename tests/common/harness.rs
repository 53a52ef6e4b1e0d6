use timeline::{Editor, HistoryInfo};

/// Test harness wrapping an [`Editor`] with assertion helpers
pub struct EditorTestHarness {
    editor: Editor,
}

impl EditorTestHarness {
    /// Create a harness around a fresh editor keeping `max_history` entries
    pub fn new(max_history: usize) -> Self {
        super::tracing::init_tracing_from_env();
        Self {
            editor: Editor::new(max_history),
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    /// Append `text` at the end of the buffer
    pub fn type_text(&mut self, text: &str) {
        let end = self.editor.length();
        self.editor.insert(end, text);
    }

    /// Undo and assert the resulting text
    pub fn undo_expecting(&mut self, expected: &str) {
        assert!(
            self.editor.undo(),
            "undo should succeed while expecting {expected:?}"
        );
        self.assert_text(expected);
    }

    /// Redo and assert the resulting text
    pub fn redo_expecting(&mut self, expected: &str) {
        assert!(
            self.editor.redo(),
            "redo should succeed while expecting {expected:?}"
        );
        self.assert_text(expected);
    }

    pub fn assert_text(&self, expected: &str) {
        assert_eq!(self.editor.text(), expected, "Buffer content mismatch");
    }

    pub fn assert_info(&self, position: Option<usize>, total: usize, can_undo: bool, can_redo: bool) {
        assert_eq!(
            self.editor.info(),
            HistoryInfo {
                position,
                total,
                can_undo,
                can_redo,
            }
        );
    }
}
