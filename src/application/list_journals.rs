//! List journals use case

use crate::domain::JournalName;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;

/// List the names of all journals in the workspace.
pub fn list_journals(repository: &FileSystemRepository) -> Result<Vec<JournalName>> {
    repository.list_journals()
}
