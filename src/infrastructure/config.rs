//! Configuration management

use crate::domain::entry::DEFAULT_TIMESTAMP_FORMAT;
use crate::error::{BlossomError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_AUTOSAVE_DELAY_MS: u64 = 2000;

fn default_autosave_delay_ms() -> u64 {
    DEFAULT_AUTOSAVE_DELAY_MS
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Quiet period before a draft is autosaved
    #[serde(default = "default_autosave_delay_ms")]
    pub autosave_delay_ms: u64,
    /// chrono format string for entry display timestamps
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            autosave_delay_ms: DEFAULT_AUTOSAVE_DELAY_MS,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            created: Utc::now(),
        }
    }

    /// Load config from .blossom/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".blossom").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BlossomError::NotBlossomDirectory(path.to_path_buf())
            } else {
                BlossomError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| BlossomError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .blossom/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let blossom_dir = path.join(".blossom");
        let config_path = blossom_dir.join("config.toml");

        if !blossom_dir.exists() {
            fs::create_dir(&blossom_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| BlossomError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    pub fn autosave_delay(&self) -> Duration {
        Duration::from_millis(self.autosave_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new();
        assert_eq!(config.autosave_delay_ms, 2000);
        assert_eq!(config.autosave_delay(), Duration::from_secs(2));
        assert_eq!(config.timestamp_format, DEFAULT_TIMESTAMP_FORMAT);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new();
        config.autosave_delay_ms = 500;

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".blossom").exists());
        assert!(temp.path().join(".blossom/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".blossom")).unwrap();
        fs::write(
            temp.path().join(".blossom/config.toml"),
            "created = \"2025-01-17T09:00:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.autosave_delay_ms, DEFAULT_AUTOSAVE_DELAY_MS);
        assert_eq!(loaded.timestamp_format, DEFAULT_TIMESTAMP_FORMAT);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            BlossomError::NotBlossomDirectory(_) => {}
            _ => panic!("Expected NotBlossomDirectory error"),
        }
    }

    #[test]
    fn test_load_invalid_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".blossom")).unwrap();
        fs::write(temp.path().join(".blossom/config.toml"), "autosave_delay_ms = [").unwrap();

        match Config::load_from_dir(temp.path()).unwrap_err() {
            BlossomError::Config(msg) => assert!(msg.contains("Failed to parse config.toml")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
