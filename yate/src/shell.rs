//! The presentation side of the editor, as seen by the file controller.

use std::path::Path;

pub const APP_NAME: &str = "YATE";
pub const UNTITLED: &str = "Untitled";

/// Everything the file controller needs from the window.
///
/// Implemented by the egui application and by test doubles.
pub trait Shell {
    fn text(&self) -> String;

    /// Replace the buffer contents
    fn set_text(&mut self, text: String);

    fn is_modified(&self) -> bool;

    fn reset_modified(&mut self);

    /// Blocking yes/no prompt. Returns true to go ahead.
    fn confirm_discard(&mut self, message: &str) -> bool;

    fn set_title(&mut self, title: String);

    fn set_status(&mut self, char_count: usize, modified: bool);

    /// Insert text at the caret. Counts as an edit.
    fn insert_at_caret(&mut self, text: &str);

    /// Modal error notification
    fn show_error(&mut self, message: &str);
}

/// Window title for a document at `path`, or an untitled one.
pub fn window_title(path: Option<&Path>) -> String {
    let name = path
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| UNTITLED.to_string());
    format!("{} - {}", APP_NAME, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_window_title() {
        assert_eq!(window_title(None), "YATE - Untitled");
        let path = PathBuf::from("/home/me/notes/todo.txt");
        assert_eq!(window_title(Some(&path)), "YATE - todo.txt");
    }
}
