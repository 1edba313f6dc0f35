//! Configuration module

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of history entries kept (oldest evicted first)
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    /// Entries shown by the interactive history view
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,

    /// Override for the history file location
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            display_limit: default_display_limit(),
            file: None,
        }
    }
}

fn default_max_entries() -> usize {
    50
}

fn default_display_limit() -> usize {
    15
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LogConfig {
    /// Also echo log lines to the console
    #[serde(default)]
    pub console: bool,

    /// Override for the event log location
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Config {
    /// Load config from the default location, falling back to defaults
    /// when no config file exists
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            return Self::load_from(&path);
        }
        Ok(Self::default())
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Application home directory with priority:
    /// 1. UCONV_HOME env var
    /// 2. ~/.uconv
    /// 3. ./.uconv as a last resort
    pub fn home_dir() -> PathBuf {
        if let Ok(env_path) = std::env::var("UCONV_HOME") {
            return PathBuf::from(env_path);
        }

        if let Some(home) = dirs::home_dir() {
            return home.join(".uconv");
        }

        PathBuf::from(".uconv")
    }

    /// Path of the config file (`<home>/config.toml`)
    pub fn config_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }

    /// Path of the persisted history file
    pub fn history_path(&self) -> PathBuf {
        self.history
            .file
            .clone()
            .unwrap_or_else(|| Self::home_dir().join("history.json"))
    }

    /// Path of the event log file
    pub fn log_path(&self) -> PathBuf {
        self.log
            .file
            .clone()
            .unwrap_or_else(|| Self::home_dir().join("application.log"))
    }
}

/// Helper to get directories crate functionality
mod dirs {
    use std::path::PathBuf;

    pub fn home_dir() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE").ok().map(PathBuf::from)
        }
        #[cfg(not(windows))]
        {
            std::env::var("HOME").ok().map(PathBuf::from)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.history.max_entries, 50);
        assert_eq!(config.history.display_limit, 15);
        assert!(config.history.file.is_none());
        assert!(!config.log.console);
    }

    #[test]
    fn test_toml_round_trip() -> Result<()> {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.history.max_entries = 10;
        config.log.console = true;
        config.save_to(&path)?;

        let loaded = Config::load_from(&path)?;
        assert_eq!(loaded.history.max_entries, 10);
        assert!(loaded.log.console);
        Ok(())
    }

    #[test]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[history]\nmax_entries = 5\n")?;

        let config = Config::load_from(&path)?;
        assert_eq!(config.history.max_entries, 5);
        assert_eq!(config.history.display_limit, 15);
        Ok(())
    }

    #[test]
    fn test_file_overrides_win() {
        let config = Config {
            history: HistoryConfig {
                file: Some(PathBuf::from("/tmp/h.json")),
                ..Default::default()
            },
            log: LogConfig {
                file: Some(PathBuf::from("/tmp/a.log")),
                console: false,
            },
        };
        assert_eq!(config.history_path(), PathBuf::from("/tmp/h.json"));
        assert_eq!(config.log_path(), PathBuf::from("/tmp/a.log"));
    }
}
