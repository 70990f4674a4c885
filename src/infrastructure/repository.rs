//! File system repository

use crate::domain::JournalName;
use crate::error::{LogbookError, Result};
use crate::infrastructure::config::{Config, WORKSPACE_DIR};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Backing storage for journal files.
///
/// Writes must be durable before returning `Ok`: callers commit in-memory
/// state only after a successful write.
pub trait JournalRepository {
    /// Read the raw contents of a journal; `NotFound` when it has no backing file
    fn read_journal(&self, name: &JournalName) -> Result<String>;

    /// Replace the contents of a journal
    fn write_journal(&self, name: &JournalName, contents: &str) -> Result<()>;
}

/// One flat file per journal under the configured journal directory
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
    journal_dir: PathBuf,
    extension: String,
}

impl FileSystemRepository {
    /// Create a repository for the workspace at `root` using default settings
    pub fn new(root: PathBuf) -> Self {
        Self::with_config(root, &Config::default())
    }

    /// Create a repository for the workspace at `root` using the given settings
    pub fn with_config(root: PathBuf, config: &Config) -> Self {
        FileSystemRepository {
            journal_dir: config.journal_path(&root),
            extension: config.extension.clone(),
            root,
        }
    }

    /// Open the workspace at `root`, reading its config
    pub fn open(root: PathBuf) -> Result<Self> {
        let config = Config::load_from_dir(&root)?;
        Ok(Self::with_config(root, &config))
    }

    /// Discover the workspace root by walking up from the current directory.
    /// First checks the LOGBOOK_ROOT environment variable, then falls back to discovery.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("LOGBOOK_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_workspace_dir(&path) {
                return Self::open(path);
            } else {
                return Err(LogbookError::Config(format!(
                    "LOGBOOK_ROOT is set to '{}' but no .logbook directory found. \
                    Run 'logbook init' in that directory or unset LOGBOOK_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the workspace root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_workspace_dir(&current) {
                return Self::open(current);
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(LogbookError::NotLogbookDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_workspace_dir(path: &Path) -> bool {
        path.join(WORKSPACE_DIR).is_dir()
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_workspace_dir(&self.root)
    }

    /// Create the .logbook directory
    pub fn initialize(&self) -> Result<()> {
        let workspace_dir = self.root.join(WORKSPACE_DIR);

        if workspace_dir.exists() {
            return Err(LogbookError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&workspace_dir)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    pub fn journal_dir(&self) -> &Path {
        &self.journal_dir
    }

    /// Location of the backing file for `name`
    pub fn journal_path(&self, name: &JournalName) -> PathBuf {
        self.journal_dir
            .join(format!("{}.{}", name.as_str(), self.extension))
    }

    /// Names of all journals with a backing file, sorted
    pub fn list_journals(&self) -> Result<Vec<JournalName>> {
        if !self.journal_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&self.journal_dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| LogbookError::Io(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(self.extension.as_str()) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Ok(name) = JournalName::parse(stem) {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }

    fn temp_path(&self, name: &JournalName) -> PathBuf {
        self.journal_dir.join(format!(
            ".{}.{}.tmp-{}",
            name.as_str(),
            self.extension,
            std::process::id()
        ))
    }

    fn write_synced(path: &Path, contents: &str) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()
    }

    /// Flush directory metadata so a completed rename survives a crash
    #[cfg(unix)]
    fn sync_dir(dir: &Path) -> std::io::Result<()> {
        File::open(dir)?.sync_all()
    }

    #[cfg(not(unix))]
    fn sync_dir(_dir: &Path) -> std::io::Result<()> {
        Ok(())
    }
}

impl JournalRepository for FileSystemRepository {
    fn read_journal(&self, name: &JournalName) -> Result<String> {
        let path = self.journal_path(name);
        log::debug!("Reading journal file {}", path.display());

        fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LogbookError::NotFound(name.to_string())
            } else {
                LogbookError::Io(e)
            }
        })
    }

    /// Write to a synced temp file in the same directory, rename it into place,
    /// then sync the directory
    fn write_journal(&self, name: &JournalName, contents: &str) -> Result<()> {
        if !self.journal_dir.exists() {
            fs::create_dir_all(&self.journal_dir)?;
        }

        let path = self.journal_path(name);
        let tmp_path = self.temp_path(name);

        let result =
            Self::write_synced(&tmp_path, contents).and_then(|()| fs::rename(&tmp_path, &path));
        if let Err(e) = result {
            log::warn!("Failed to write journal file {}: {}", path.display(), e);
            let _ = fs::remove_file(&tmp_path);
            return Err(LogbookError::Io(e));
        }

        Self::sync_dir(&self.journal_dir).map_err(|e| {
            log::warn!(
                "Failed to sync journal directory {}: {}",
                self.journal_dir.display(),
                e
            );
            LogbookError::Io(e)
        })?;

        log::debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }
}
