//! Editor commands, their accelerators, and the emoji menu table.

use egui::{Key, Modifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    New,
    Open,
    Save,
    SaveAs,
    Quit,
    /// Index into the emoji menu
    InsertEmoji(usize),
}

impl Command {
    /// File menu entries, in menu order
    pub const FILE_MENU: [Command; 4] = [Command::New, Command::Open, Command::Save, Command::SaveAs];

    pub fn label(self) -> &'static str {
        match self {
            Command::New => "New",
            Command::Open => "Open",
            Command::Save => "Save",
            Command::SaveAs => "Save As",
            Command::Quit => "Quit",
            Command::InsertEmoji(_) => "Insert emoji",
        }
    }

    pub fn key(self) -> Option<Key> {
        match self {
            Command::New => Some(Key::N),
            Command::Open => Some(Key::O),
            Command::Save => Some(Key::S),
            Command::SaveAs => Some(Key::W),
            Command::Quit => Some(Key::Q),
            Command::InsertEmoji(_) => None,
        }
    }

    /// Accelerator text for menus, e.g. "Ctrl+N"
    pub fn accelerator(self) -> Option<String> {
        self.key().map(|k| format!("Ctrl+{}", k.name()))
    }

    /// Map a key press to a command. Only bare Ctrl/⌘ combos are bound.
    pub fn from_key(key: Key, modifiers: Modifiers) -> Option<Command> {
        if !modifiers.command || modifiers.shift || modifiers.alt {
            return None;
        }
        [Command::New, Command::Open, Command::Save, Command::SaveAs, Command::Quit]
            .into_iter()
            .find(|c| c.key() == Some(key))
    }
}

/// Label to inserted-text table for the emoji submenu.
#[derive(Clone, Debug, Default)]
pub struct EmojiMenu {
    entries: Vec<(String, String)>,
}

impl EmojiMenu {
    /// One entry per emoji; label and inserted text are the emoji itself.
    pub fn from_emojis(emojis: Vec<String>) -> Self {
        Self {
            entries: emojis.into_iter().map(|e| (e.clone(), e)).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries.iter().enumerate().map(|(i, (label, _))| (i, label.as_str()))
    }

    /// Text inserted for the entry at `index`
    pub fn text(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(_, text)| text.as_str())
    }
}
