//! File system repository

use crate::error::{BlossomError, Result};
use crate::infrastructure::{Config, FileStore};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const BLOSSOM_DIR: &str = ".blossom";
const STORAGE_FILE: &str = "storage.json";

/// Abstract repository for diary directory operations
pub trait DiaryRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .blossom/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .blossom/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .blossom directory exists
    fn is_initialized(&self) -> bool;

    /// Create .blossom directory structure
    fn initialize(&self) -> Result<()>;

    /// Open the key-value store kept in .blossom/storage.json
    fn open_store(&self) -> Result<FileStore>;
}

/// File system implementation of DiaryRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the diary root.
    /// First checks BLOSSOM_ROOT, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("BLOSSOM_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_blossom_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(BlossomError::Config(format!(
                    "BLOSSOM_ROOT is set to '{}' but no .blossom directory found. \
                    Run 'blossom init' in that directory or unset BLOSSOM_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover diary root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_blossom_dir(&current) {
                debug!(root = %current.display(), "found diary root");
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(BlossomError::NotBlossomDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_blossom_dir(path: &Path) -> bool {
        path.join(BLOSSOM_DIR).is_dir()
    }

    pub fn storage_path(&self) -> PathBuf {
        self.root.join(BLOSSOM_DIR).join(STORAGE_FILE)
    }
}

impl DiaryRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_blossom_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let blossom_dir = self.root.join(BLOSSOM_DIR);

        if blossom_dir.exists() {
            return Err(BlossomError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&blossom_dir)?;
        Ok(())
    }

    fn open_store(&self) -> Result<FileStore> {
        FileStore::open(&self.storage_path())
    }
}
