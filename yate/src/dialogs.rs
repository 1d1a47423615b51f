//! File pickers and message boxes.
//!
//! Native dialogs come from `rfd` and block the UI thread until closed.

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSION: &str = "txt";

/// Prompts for paths. `None` means the user cancelled.
pub trait FilePicker {
    fn pick_file(&mut self, initial_dir: &Path) -> Option<PathBuf>;

    fn pick_directory(&mut self, initial_dir: &Path) -> Option<PathBuf>;

    /// Ask for a destination path, suggesting `file_name`
    fn pick_save_path(&mut self, initial_dir: &Path, file_name: &str) -> Option<PathBuf>;
}

/// Platform dialogs
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialogs;

impl FilePicker for NativeDialogs {
    fn pick_file(&mut self, initial_dir: &Path) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Open")
            .set_directory(initial_dir)
            .add_filter("Text", &[DEFAULT_EXTENSION])
            .add_filter("All files", &["*"])
            .pick_file()
    }

    fn pick_directory(&mut self, initial_dir: &Path) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Save into folder")
            .set_directory(initial_dir)
            .pick_folder()
    }

    fn pick_save_path(&mut self, initial_dir: &Path, file_name: &str) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Save As")
            .set_directory(initial_dir)
            .set_file_name(file_name)
            .add_filter("Text", &[DEFAULT_EXTENSION])
            .save_file()
    }
}

/// Ok/cancel warning box. True when the user accepts.
pub fn confirm(title: &str, message: &str) -> bool {
    let result = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::OkCancel)
        .show();
    matches!(result, MessageDialogResult::Ok | MessageDialogResult::Yes)
}

pub fn error(title: &str, message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Append the default extension when `path` has none.
pub fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(DEFAULT_EXTENSION)
    }
}
