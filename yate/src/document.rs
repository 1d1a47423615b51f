//! Document model for YATE
//!
//! Plain `String` storage so the egui text widget can edit it in place.

/// The text buffer being edited
#[derive(Clone, Debug, Default)]
pub struct Document {
    /// The text content
    pub text: String,
    /// Caret position as a char index
    caret: usize,
    /// Whether the buffer has unsaved changes
    modified: bool,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole buffer. The caret moves to the end.
    /// Does not touch the modified flag; loading code resets it explicitly.
    pub fn set_text(&mut self, text: String) {
        self.text = text;
        self.caret = self.char_count();
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Record the caret reported by the text widget.
    pub fn set_caret(&mut self, char_idx: usize) {
        self.caret = char_idx.min(self.char_count());
    }

    /// Insert at the caret and move the caret past the inserted text.
    pub fn insert_at_caret(&mut self, text: &str) {
        let caret = self.caret.min(self.char_count());
        let byte_idx = self
            .text
            .char_indices()
            .nth(caret)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len());
        self.text.insert_str(byte_idx, text);
        self.caret = caret + text.chars().count();
        self.modified = true;
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Flag an edit made directly on `text` (e.g. by the text widget)
    pub fn mark_modified(&mut self) {
        self.modified = true;
    }

    pub fn reset_modified(&mut self) {
        self.modified = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with(text: &str) -> Document {
        let mut doc = Document::new();
        doc.set_text(text.to_string());
        doc
    }

    #[test]
    fn test_new_document() {
        let doc = Document::new();
        assert_eq!(doc.char_count(), 0);
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_set_text_moves_caret_to_end() {
        let mut doc = Document::new();
        doc.set_text("héllo".to_string());
        assert_eq!(doc.char_count(), 5);
        assert_eq!(doc.caret(), 5);
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_insert_at_caret() {
        let mut doc = doc_with("ab");
        doc.set_caret(1);
        doc.insert_at_caret("😀");
        assert_eq!(doc.text, "a😀b");
        assert_eq!(doc.caret(), 2);
        assert!(doc.is_modified());

        doc.insert_at_caret("x");
        assert_eq!(doc.text, "a😀xb");
    }

    #[test]
    fn test_caret_clamped() {
        let mut doc = doc_with("abc");
        doc.set_caret(99);
        assert_eq!(doc.caret(), 3);
        doc.insert_at_caret("!");
        assert_eq!(doc.text, "abc!");
    }
}
