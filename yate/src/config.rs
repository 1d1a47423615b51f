//! Startup configuration

use std::path::{Path, PathBuf};

/// Overrides the assets directory
pub const ASSETS_ENV: &str = "YATE_ASSETS";
pub const DEFAULT_ASSETS_DIR: &str = "assets";

pub const METADATA_FILE: &str = "metadata.json";
pub const EMOJIS_FILE: &str = "emojis.txt";

pub const MIN_WIDTH: f32 = 950.0;
pub const MIN_HEIGHT: f32 = 460.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub assets_dir: PathBuf,
    /// File to open at startup, from the first CLI argument
    pub initial_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        let assets_dir = std::env::var_os(ASSETS_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR));
        Self {
            initial_file: std::env::args().nth(1).map(PathBuf::from),
            ..Self::with_assets_dir(assets_dir)
        }
    }

    pub fn with_assets_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            assets_dir: dir.as_ref().to_path_buf(),
            initial_file: None,
        }
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.assets_dir.join(METADATA_FILE)
    }

    pub fn emojis_path(&self) -> PathBuf {
        self.assets_dir.join(EMOJIS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_paths() {
        let config = Config::with_assets_dir("/opt/yate/assets");
        assert_eq!(config.metadata_path(), PathBuf::from("/opt/yate/assets/metadata.json"));
        assert_eq!(config.emojis_path(), PathBuf::from("/opt/yate/assets/emojis.txt"));
        assert_eq!(config.initial_file, None);
    }
}
