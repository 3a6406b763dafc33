//! Error types for blossom

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for blossom application
#[derive(Debug, Error)]
pub enum BlossomError {
    #[error("{0}")]
    Validation(String),

    #[error("Could not read stored entries: {0}")]
    Deserialization(String),

    #[error("Not a blossom directory: {0}")]
    NotBlossomDirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl BlossomError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BlossomError::NotBlossomDirectory(_) => 2,
            BlossomError::Validation(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            BlossomError::NotBlossomDirectory(path) => {
                format!(
                    "Not a blossom directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'blossom init' in this directory to create a new diary\n\
                    • Navigate to an existing blossom directory\n\
                    • Set BLOSSOM_ROOT environment variable to your diary path",
                    path.display()
                )
            }
            BlossomError::Config(msg) => {
                if msg.contains("Invalid theme") {
                    format!(
                        "{}\n\n\
                        Valid themes: cherry-blossom, night-sky, forest\n\
                        Example: blossom theme night-sky",
                        msg
                    )
                } else if msg.contains("Invalid duration") {
                    format!(
                        "{}\n\n\
                        Expected format: 1h30m, 90s, 2m 5s\n\
                        Example: blossom timer 25m",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using BlossomError
pub type Result<T> = std::result::Result<T, BlossomError>;
