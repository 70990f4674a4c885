//! Configuration management

use crate::error::{LogbookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the workspace marker directory holding `config.toml`
pub const WORKSPACE_DIR: &str = ".logbook";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the journal files, relative to the workspace root unless absolute
    #[serde(default = "default_journal_dir")]
    pub journal_dir: PathBuf,
    /// File extension of journal files
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_journal_dir() -> PathBuf {
    PathBuf::from("journals")
}

fn default_extension() -> String {
    "txt".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            journal_dir: default_journal_dir(),
            extension: default_extension(),
        }
    }
}

impl Config {
    /// Load config from .logbook/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(WORKSPACE_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LogbookError::NotLogbookDirectory(path.to_path_buf())
            } else {
                LogbookError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| LogbookError::Config(format!("Failed to parse config.toml: {}", e)))?;
        Self::validate_extension(&config.extension)?;
        Ok(config)
    }

    /// Save config to .logbook/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let workspace_dir = path.join(WORKSPACE_DIR);
        let config_path = workspace_dir.join("config.toml");

        if !workspace_dir.exists() {
            fs::create_dir(&workspace_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| LogbookError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Absolute location of the journal directory for a workspace rooted at `root`
    pub fn journal_path(&self, root: &Path) -> PathBuf {
        if self.journal_dir.is_absolute() {
            self.journal_dir.clone()
        } else {
            root.join(&self.journal_dir)
        }
    }

    /// Extensions are short alphanumeric suffixes such as `txt`
    pub fn validate_extension(extension: &str) -> Result<()> {
        if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(LogbookError::Config(format!(
                "Invalid extension: '{}'. Use letters and digits only, e.g. 'txt'",
                extension
            )));
        }
        Ok(())
    }
}
