//! File controller
//!
//! Runs editor commands against a [`Shell`]: new/open/save/save-as/quit and
//! emoji insertion. Owns the file reference and the preferences record.

use crate::command::{Command, EmojiMenu};
use crate::dialogs::{with_default_extension, FilePicker, DEFAULT_EXTENSION};
use crate::shell::{window_title, Shell};
use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};
use thiserror::Error;
use yatecore::storage::Preferences;

const DISCARD_MESSAGE: &str = "Are you sure you want to open another file without saving this?";
const NEW_MESSAGE: &str = "Are you sure you want to start a new file without saving this?";
const QUIT_MESSAGE: &str = "Are you sure you want to exit?";

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Unable to open {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unable to save {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, EditorError>;

/// How a command ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// A picker was dismissed
    Cancelled,
    /// The user refused to discard unsaved changes
    Declined,
    /// The error was already reported to the user
    Failed,
    /// The window should close
    Quit,
}

pub struct FileController<P: FilePicker> {
    picker: P,
    file_path: Option<PathBuf>,
    preferences: Preferences,
    preferences_path: PathBuf,
    emojis: EmojiMenu,
}

impl<P: FilePicker> FileController<P> {
    /// Build a controller, reading preferences from `preferences_path`.
    pub fn new(picker: P, preferences_path: PathBuf, emojis: EmojiMenu) -> Self {
        let preferences = Preferences::load_or_default(&preferences_path);
        Self {
            picker,
            file_path: None,
            preferences,
            preferences_path,
            emojis,
        }
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn emojis(&self) -> &EmojiMenu {
        &self.emojis
    }

    /// Run `command`, reporting any failure through the shell.
    pub fn dispatch<S: Shell>(&mut self, command: Command, shell: &mut S) -> Outcome {
        tracing::debug!(?command, "dispatch");
        let result = match command {
            Command::New => self.new_file(shell),
            Command::Open => self.open_file(shell),
            Command::Save => self.save_file(shell),
            Command::SaveAs => self.save_as(shell),
            Command::Quit => Ok(self.quit(shell)),
            Command::InsertEmoji(index) => Ok(self.insert_emoji(index, shell)),
        };
        match result {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("{} failed: {}", command.label(), e);
                shell.show_error(&e.to_string());
                Outcome::Failed
            }
        }
    }

    pub fn new_file<S: Shell>(&mut self, shell: &mut S) -> Result<Outcome> {
        if !confirm_discard(shell, NEW_MESSAGE) {
            return Ok(Outcome::Declined);
        }
        self.file_path = None;
        shell.set_text(String::new());
        shell.reset_modified();
        shell.set_title(window_title(None));
        shell.set_status(0, false);
        Ok(Outcome::Done)
    }

    pub fn open_file<S: Shell>(&mut self, shell: &mut S) -> Result<Outcome> {
        if !confirm_discard(shell, DISCARD_MESSAGE) {
            return Ok(Outcome::Declined);
        }
        let Some(path) = self.picker.pick_file(&self.preferences.initial_dir()) else {
            return Ok(Outcome::Cancelled);
        };
        self.open_path(path, shell)
    }

    /// Load `path` into the buffer without prompting.
    /// On a read error nothing in the shell or controller changes.
    pub fn open_path<S: Shell>(&mut self, path: PathBuf, shell: &mut S) -> Result<Outcome> {
        let path = absolute_path(path);
        let text = std::fs::read_to_string(&path).map_err(|source| EditorError::Read {
            path: path.clone(),
            source,
        })?;
        let char_count = text.chars().count();

        shell.set_text(text);
        shell.set_title(window_title(Some(&path)));
        shell.reset_modified();
        shell.set_status(char_count, false);
        self.remember_dir(&path);
        tracing::info!("opened {} ({} chars)", path.display(), char_count);
        self.file_path = Some(path);
        Ok(Outcome::Done)
    }

    /// Save to the current file, or to a fresh timestamped file in a chosen
    /// directory when there is none yet.
    pub fn save_file<S: Shell>(&mut self, shell: &mut S) -> Result<Outcome> {
        let path = match &self.file_path {
            Some(path) => path.clone(),
            None => {
                let Some(dir) = self.picker.pick_directory(&self.preferences.initial_dir()) else {
                    return Ok(Outcome::Cancelled);
                };
                untitled_path(&dir, Local::now().naive_local())
            }
        };
        self.write_to(path, shell)
    }

    /// Always ask for a destination. A failed write leaves the previous file
    /// reference, title and preferences in place.
    pub fn save_as<S: Shell>(&mut self, shell: &mut S) -> Result<Outcome> {
        let suggested = self
            .file_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| format!("untitled.{}", DEFAULT_EXTENSION));
        let initial_dir = self
            .file_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.preferences.initial_dir());

        let Some(path) = self.picker.pick_save_path(&initial_dir, &suggested) else {
            return Ok(Outcome::Cancelled);
        };
        self.write_to(with_default_extension(path), shell)
    }

    pub fn quit<S: Shell>(&mut self, shell: &mut S) -> Outcome {
        if confirm_discard(shell, QUIT_MESSAGE) {
            Outcome::Quit
        } else {
            Outcome::Declined
        }
    }

    pub fn insert_emoji<S: Shell>(&mut self, index: usize, shell: &mut S) -> Outcome {
        match self.emojis.text(index) {
            Some(text) => {
                shell.insert_at_caret(text);
                Outcome::Done
            }
            None => {
                tracing::warn!("no emoji at index {}", index);
                Outcome::Cancelled
            }
        }
    }

    fn write_to<S: Shell>(&mut self, path: PathBuf, shell: &mut S) -> Result<Outcome> {
        let path = absolute_path(path);
        let text = shell.text();
        std::fs::write(&path, &text).map_err(|source| EditorError::Write {
            path: path.clone(),
            source,
        })?;

        shell.set_title(window_title(Some(&path)));
        shell.reset_modified();
        shell.set_status(text.chars().count(), false);
        self.remember_dir(&path);
        tracing::info!("saved {}", path.display());
        self.file_path = Some(path);
        Ok(Outcome::Done)
    }

    /// Store the parent of `path` as the last used directory and rewrite the
    /// preferences file. A failed write is only logged.
    fn remember_dir(&mut self, path: &Path) {
        let Some(dir) = path.parent() else {
            return;
        };
        self.preferences.last_path_used = Some(dir.to_path_buf());
        match self.preferences.save(&self.preferences_path) {
            Ok(()) => tracing::debug!("preferences updated: {}", dir.display()),
            Err(e) => tracing::warn!(
                "could not write preferences to {}: {}",
                self.preferences_path.display(),
                e
            ),
        }
    }
}

fn confirm_discard<S: Shell>(shell: &mut S, message: &str) -> bool {
    !shell.is_modified() || shell.confirm_discard(message)
}

/// Resolve against the working directory so the parent is never empty.
fn absolute_path(path: PathBuf) -> PathBuf {
    std::path::absolute(&path).unwrap_or(path)
}

/// `<dir>/untitled-YYYYMMDD-HHMMSS.txt`, or `...-HHMMSS-N.txt` when that
/// name is already taken.
pub fn untitled_path(dir: &Path, now: NaiveDateTime) -> PathBuf {
    let stem = format!("untitled-{}", now.format("%Y%m%d-%H%M%S"));
    let mut path = dir.join(format!("{}.{}", stem, DEFAULT_EXTENSION));
    let mut n = 1;
    while path.exists() {
        path = dir.join(format!("{}-{}.{}", stem, n, DEFAULT_EXTENSION));
        n += 1;
    }
    path
}
