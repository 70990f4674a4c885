//! Config management use case

use crate::error::{LogbookError, Result};
use crate::infrastructure::{Config, FileSystemRepository};
use std::path::PathBuf;

/// Service for managing workspace configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "journal_dir" => Ok(config.journal_dir.display().to_string()),
            "extension" => Ok(config.extension),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "journal_dir" => {
                if value.trim().is_empty() {
                    return Err(LogbookError::Config(
                        "journal_dir cannot be empty".to_string(),
                    ));
                }
                config.journal_dir = PathBuf::from(value);
            }
            "extension" => {
                Config::validate_extension(value)?;
                config.extension = value.to_string();
            }
            _ => return Err(unknown_key(key)),
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn unknown_key(key: &str) -> LogbookError {
    LogbookError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: journal_dir, extension",
        key
    ))
}
