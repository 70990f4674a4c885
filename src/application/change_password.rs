//! Change password use case

use crate::application::AccessService;
use crate::domain::Credential;
use crate::error::{LogbookError, Result};
use crate::infrastructure::{JournalRepository, JournalStore};

/// Service for replacing a journal's credential
pub struct ChangePasswordService<'a, R> {
    store: &'a JournalStore<R>,
}

impl<'a, R: JournalRepository> ChangePasswordService<'a, R> {
    pub fn new(store: &'a JournalStore<R>) -> Self {
        ChangePasswordService { store }
    }

    /// Authorize with the current password, then store a hash of `new_password`
    pub fn execute(
        &self,
        name: &str,
        username: Option<&str>,
        password: &str,
        new_password: &str,
        confirm: &str,
    ) -> Result<()> {
        AccessService::new(self.store).authorize(name, username, password)?;

        if new_password != confirm {
            return Err(LogbookError::Validation(
                "Passwords did not match".to_string(),
            ));
        }

        let credential = Credential::hash(new_password)?;
        self.store.change_password(name, credential)?;
        log::info!("Password changed for journal {}", name);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{AddEntryService, CreateJournalService};
    use crate::infrastructure::FileSystemRepository;
    use tempfile::TempDir;

    fn open_store(temp: &TempDir) -> JournalStore {
        JournalStore::new(FileSystemRepository::new(temp.path().to_path_buf()))
    }

    #[test]
    fn test_change_password_survives_reload() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        CreateJournalService::new(&store)
            .execute("j", None, "old")
            .unwrap();
        AddEntryService::new(&store)
            .execute("j", None, "old", "Entry one. Body.")
            .unwrap();
        let before = store.get("j").unwrap();

        ChangePasswordService::new(&store)
            .execute("j", None, "old", "new", "new")
            .unwrap();

        // A fresh store reads everything back from disk
        let cold = open_store(&temp);
        let access = AccessService::new(&cold);
        assert!(matches!(
            access.authorize("j", None, "old"),
            Err(LogbookError::Unauthorized(_))
        ));
        let after = access.authorize("j", None, "new").unwrap();
        assert_eq!(after.entries(), before.entries());
    }

    #[test]
    fn test_confirmation_mismatch() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        CreateJournalService::new(&store)
            .execute("j", None, "old")
            .unwrap();

        match ChangePasswordService::new(&store).execute("j", None, "old", "a", "b") {
            Err(LogbookError::Validation(msg)) => assert_eq!(msg, "Passwords did not match"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
        assert!(AccessService::new(&store).authorize("j", None, "old").is_ok());
    }

    #[test]
    fn test_wrong_current_password() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        CreateJournalService::new(&store)
            .execute("j", None, "old")
            .unwrap();

        assert!(matches!(
            ChangePasswordService::new(&store).execute("j", None, "bad", "new", "new"),
            Err(LogbookError::Unauthorized(_))
        ));
    }
}
