//! Initialize workspace use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository};
use std::fs;
use std::path::Path;

/// Service for creating a new logbook workspace
pub struct InitService;

impl InitService {
    /// Initialize a workspace at `path`, creating the directory and the journal directory.
    pub fn execute(path: &Path, config: Config) -> Result<FileSystemRepository> {
        Config::validate_extension(&config.extension)?;

        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let repo = FileSystemRepository::with_config(path.to_path_buf(), &config);
        repo.initialize()?;
        repo.save_config(&config)?;

        fs::create_dir_all(repo.journal_dir())?;
        log::info!("Initialized logbook workspace at {}", path.display());

        Ok(repo)
    }
}
