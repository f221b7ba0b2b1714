//! # Configuration
//!
//! Configuration is loaded with [`confique`], layered in priority order:
//!
//! 1. **Command-line flags** (`--settings`, `--worlds`), applied by the binary
//! 2. **Environment variables**: `WBTAGS_SETTINGS`, `WBTAGS_WORLDS_DIR`,
//!    `WBTAGS_DEBOUNCE_MS`, `WBTAGS_MAX_WAIT_MS`
//! 3. **Config file**: `wbtags.toml` in the OS config directory
//! 4. **Compiled defaults**
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `settings` | `<data dir>/settings.json` | Tag settings file |
//! | `worlds_dir` | none | Host directory holding `<world>.json` files |
//! | `debounce_ms` | `500` | Quiet period before a coalesced write |
//! | `max_wait_ms` | `5000` | Longest a write may be held back |

use crate::error::Result;
use crate::store::debounce::DebounceConfig;
use confique::Config;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "wbtags.toml";
pub const SETTINGS_FILENAME: &str = "settings.json";

#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct WbTagsConfig {
    /// Path of the JSON file holding tags and the active filter.
    #[config(env = "WBTAGS_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Directory holding the host's world-book files.
    #[config(env = "WBTAGS_WORLDS_DIR")]
    pub worlds_dir: Option<PathBuf>,

    /// Quiet period in milliseconds before a coalesced write goes out.
    #[config(env = "WBTAGS_DEBOUNCE_MS", default = 500)]
    pub debounce_ms: u64,

    /// Longest a pending write may be held back, in milliseconds.
    #[config(env = "WBTAGS_MAX_WAIT_MS", default = 5000)]
    pub max_wait_ms: u64,
}

impl Default for WbTagsConfig {
    fn default() -> Self {
        Self {
            settings: None,
            worlds_dir: None,
            debounce_ms: 500,
            max_wait_ms: 5000,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "wbtags")
}

impl WbTagsConfig {
    /// Load from environment and an optional config file.
    ///
    /// With `config_file` unset, the OS config directory is used. A missing
    /// file is not an error.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let file = config_file
            .map(Path::to_path_buf)
            .or_else(|| project_dirs().map(|d| d.config_dir().join(CONFIG_FILENAME)));

        let mut builder = Self::builder().env();
        if let Some(file) = file {
            log::debug!("reading config from {}", file.display());
            builder = builder.file(file);
        }
        Ok(builder.load()?)
    }

    /// Settings file path, falling back to the OS data directory.
    pub fn settings_path(&self) -> PathBuf {
        self.settings.clone().unwrap_or_else(|| {
            project_dirs()
                .map(|d| d.data_dir().join(SETTINGS_FILENAME))
                .unwrap_or_else(|| PathBuf::from(SETTINGS_FILENAME))
        })
    }

    pub fn debounce(&self) -> DebounceConfig {
        DebounceConfig::from_millis(self.debounce_ms, self.max_wait_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_sources() {
        let config = WbTagsConfig::builder().load().unwrap();
        assert_eq!(config, WbTagsConfig::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            "settings = \"/tmp/tags.json\"\nworlds_dir = \"/srv/worlds\"\ndebounce_ms = 50\n",
        )
        .unwrap();

        let config = WbTagsConfig::builder().file(&path).load().unwrap();
        assert_eq!(config.settings_path(), PathBuf::from("/tmp/tags.json"));
        assert_eq!(config.worlds_dir, Some(PathBuf::from("/srv/worlds")));
        assert_eq!(config.debounce_ms, 50);
        assert_eq!(config.max_wait_ms, 5000);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = WbTagsConfig::builder()
            .file(temp.path().join("absent.toml"))
            .load()
            .unwrap();
        assert_eq!(config, WbTagsConfig::default());
    }

    #[test]
    fn test_settings_path_fallback_is_json() {
        let config = WbTagsConfig::default();
        assert!(config.settings_path().ends_with(SETTINGS_FILENAME));
    }

    #[test]
    fn test_debounce_config() {
        let config = WbTagsConfig {
            debounce_ms: 10,
            max_wait_ms: 20,
            ..Default::default()
        };
        let debounce = config.debounce();
        assert_eq!(debounce.debounce, Duration::from_millis(10));
        assert_eq!(debounce.max_wait, Duration::from_millis(20));
    }
}
