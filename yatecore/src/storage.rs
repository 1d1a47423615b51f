//! Storage utilities for YATE
//!
//! Handles the preferences record and the emoji list asset.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("File not found: {0}")]
    NotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Small persisted key-value record.
///
/// Only `last_path_used` is interpreted. Any other keys found on disk are
/// kept and written back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_path_used: Option<PathBuf>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Preferences {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load preferences, falling back to defaults when the file is missing
    /// or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(prefs) => prefs,
            Err(StorageError::NotFound(p)) => {
                tracing::info!("no preferences at {}, using defaults", p.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("ignoring preferences at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Rewrite the whole record to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Directory a file picker should start in.
    pub fn initial_dir(&self) -> PathBuf {
        self.last_path_used
            .clone()
            .filter(|p| p.is_dir())
            .unwrap_or_else(home_dir)
    }
}

/// Split an emoji list into entries: one per line, trimmed, blanks dropped.
pub fn parse_emojis(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn load_emojis(path: &Path) -> Result<Vec<String>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(StorageError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    Ok(parse_emojis(&contents))
}

/// Get the user's home directory
pub fn home_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_preferences() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("metadata.json");
        assert!(matches!(Preferences::load(&path), Err(StorageError::NotFound(_))));
        assert_eq!(Preferences::load_or_default(&path), Preferences::default());
    }

    #[test]
    fn test_preferences_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("assets").join("metadata.json");
        let prefs = Preferences {
            last_path_used: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        prefs.save(&path).unwrap();

        let loaded = Preferences::load(&path).unwrap();
        assert_eq!(loaded.last_path_used.as_deref(), Some(dir.path()));
        assert_eq!(loaded.initial_dir(), dir.path());
    }

    #[test]
    fn test_unknown_keys_preserved() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("metadata.json");
        std::fs::write(&path, r#"{"last_path_used": "/tmp", "font_size": 14}"#).unwrap();

        let mut prefs = Preferences::load(&path).unwrap();
        assert_eq!(prefs.last_path_used, Some(PathBuf::from("/tmp")));
        prefs.last_path_used = Some(PathBuf::from("/var"));
        prefs.save(&path).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["last_path_used"], "/var");
        assert_eq!(raw["font_size"], 14);
    }

    #[test]
    fn test_missing_key_and_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("metadata.json");

        std::fs::write(&path, "{}").unwrap();
        assert_eq!(Preferences::load(&path).unwrap().last_path_used, None);

        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(Preferences::load(&path), Err(StorageError::Json(_))));
        assert_eq!(Preferences::load_or_default(&path), Preferences::default());
    }

    #[test]
    fn test_initial_dir_falls_back_to_home() {
        let prefs = Preferences {
            last_path_used: Some(PathBuf::from("/definitely/not/a/real/dir")),
            ..Default::default()
        };
        assert_eq!(prefs.initial_dir(), home_dir());
        assert_eq!(Preferences::default().initial_dir(), home_dir());
    }

    #[test]
    fn test_parse_emojis() {
        let parsed = parse_emojis("😀\n\n  🎉  \n\r\n🚀");
        assert_eq!(parsed, vec!["😀", "🎉", "🚀"]);
        assert!(parse_emojis("").is_empty());
    }

    #[test]
    fn test_load_emojis() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("emojis.txt");
        assert!(matches!(load_emojis(&path), Err(StorageError::NotFound(_))));

        std::fs::write(&path, "👍\n❤️\n").unwrap();
        assert_eq!(load_emojis(&path).unwrap(), vec!["👍", "❤️"]);
    }
}
