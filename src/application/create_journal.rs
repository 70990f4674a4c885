//! Create journal use case

use crate::domain::{Credential, Journal, JournalName};
use crate::error::{LogbookError, Result};
use crate::infrastructure::{JournalRepository, JournalStore};

/// Service for creating new, empty journals
pub struct CreateJournalService<'a, R> {
    store: &'a JournalStore<R>,
}

impl<'a, R: JournalRepository> CreateJournalService<'a, R> {
    pub fn new(store: &'a JournalStore<R>) -> Self {
        CreateJournalService { store }
    }

    /// Create a journal protected by a hash of `password`
    pub fn execute(&self, name: &str, username: Option<&str>, password: &str) -> Result<Journal> {
        let name = JournalName::parse(name)?;

        match self.store.get(name.as_str()) {
            Ok(_) => return Err(LogbookError::AlreadyExists(name.to_string())),
            Err(LogbookError::NotFound(_)) => {}
            Err(e) => return Err(e),
        }

        let mut journal = Journal::new(name, Credential::hash(password)?);
        if let Some(username) = username {
            let username = username.trim();
            if username.is_empty() || username.contains(char::is_whitespace) {
                return Err(LogbookError::Validation(format!(
                    "Invalid username: '{}'. Usernames cannot be empty or contain whitespace",
                    username
                )));
            }
            journal = journal.with_username(username);
        }

        self.store.put(journal.clone())?;
        log::info!("Created journal {}", journal.name());

        Ok(journal)
    }
}
