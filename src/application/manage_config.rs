//! Config management use case

use crate::error::{BlossomError, Result};
use crate::infrastructure::{Config, DiaryRepository, FileSystemRepository};

/// Service for managing diary configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "autosave_delay_ms" => Ok(config.autosave_delay_ms.to_string()),
            "timestamp_format" => Ok(config.timestamp_format.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(BlossomError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: autosave_delay_ms, timestamp_format, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "autosave_delay_ms" => {
                config.autosave_delay_ms = value.trim().parse().map_err(|_| {
                    BlossomError::Config(format!(
                        "Invalid autosave_delay_ms: '{}'. Expected milliseconds, e.g. 2000",
                        value
                    ))
                })?;
            }
            "timestamp_format" => {
                if value.trim().is_empty() {
                    return Err(BlossomError::Config(
                        "timestamp_format cannot be empty".to_string(),
                    ));
                }
                config.timestamp_format = value.to_string();
            }
            "created" => {
                return Err(BlossomError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(BlossomError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: autosave_delay_ms, timestamp_format",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
