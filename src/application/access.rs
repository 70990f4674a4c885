//! Journal access use case: credential checks with upgrade-on-verify

use crate::domain::{Journal, Verification};
use crate::error::{LogbookError, Result};
use crate::infrastructure::{JournalRepository, JournalStore};

/// Service gating journal access behind its credential
pub struct AccessService<'a, R> {
    store: &'a JournalStore<R>,
}

impl<'a, R: JournalRepository> AccessService<'a, R> {
    pub fn new(store: &'a JournalStore<R>) -> Self {
        AccessService { store }
    }

    /// Return the journal when `username`/`password` match its stored credential.
    ///
    /// Journals without a `username:` header accept any username. When the
    /// stored credential is plaintext or an outdated hash it is replaced by a
    /// fresh hash before returning, unless it was changed in the meantime.
    pub fn authorize(&self, name: &str, username: Option<&str>, password: &str) -> Result<Journal> {
        let journal = self.store.get(name)?;

        if let Some(expected) = journal.username() {
            if username != Some(expected) {
                log::warn!("Unauthorized access attempt to {} (username mismatch)", name);
                return Err(LogbookError::Unauthorized(name.to_string()));
            }
        }

        match journal.credential().verify(password)? {
            Verification::Rejected => {
                log::warn!("Unauthorized access attempt to {}", name);
                Err(LogbookError::Unauthorized(name.to_string()))
            }
            Verification::Accepted { upgrade: None } => Ok(journal),
            Verification::Accepted {
                upgrade: Some(credential),
            } => {
                if self
                    .store
                    .upgrade_credential(name, journal.credential(), credential)?
                {
                    log::info!("Upgraded stored credential for journal {}", name);
                }
                self.store.get(name)
            }
        }
    }
}
