//! Add entry use case

use crate::application::AccessService;
use crate::domain::Entry;
use crate::error::Result;
use crate::infrastructure::{JournalRepository, JournalStore};
use chrono::Local;

/// Service for submitting a new entry to a journal
pub struct AddEntryService<'a, R> {
    store: &'a JournalStore<R>,
}

impl<'a, R: JournalRepository> AddEntryService<'a, R> {
    pub fn new(store: &'a JournalStore<R>) -> Self {
        AddEntryService { store }
    }

    /// Authorize, then append `text` as a new entry and return it
    pub fn execute(
        &self,
        name: &str,
        username: Option<&str>,
        password: &str,
        text: &str,
    ) -> Result<Entry> {
        AccessService::new(self.store).authorize(name, username, password)?;

        self.store.add_entry(name, text, Local::now().naive_local())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::CreateJournalService;
    use crate::error::LogbookError;
    use crate::infrastructure::FileSystemRepository;
    use tempfile::TempDir;

    #[test]
    fn test_add_entry() {
        let temp = TempDir::new().unwrap();
        let store = JournalStore::new(FileSystemRepository::new(temp.path().to_path_buf()));
        CreateJournalService::new(&store)
            .execute("j", None, "pw")
            .unwrap();

        let entry = AddEntryService::new(&store)
            .execute("j", None, "pw", "Sunny today? Yes, very.")
            .unwrap();

        assert_eq!(entry.title(), "Sunny today?");
        assert_eq!(entry.body(), "Yes, very.");
        assert_eq!(store.get("j").unwrap().entries().len(), 1);
    }

    #[test]
    fn test_interleaved_writers_get_their_own_entry() {
        let temp = TempDir::new().unwrap();
        let store = JournalStore::new(FileSystemRepository::new(temp.path().to_path_buf()));
        CreateJournalService::new(&store)
            .execute("j", None, "pw")
            .unwrap();

        std::thread::scope(|scope| {
            for writer in ["Alice", "Bob"] {
                let store = &store;
                scope.spawn(move || {
                    let service = AddEntryService::new(store);
                    for i in 0..5 {
                        let entry = service
                            .execute("j", None, "pw", &format!("{} wrote {}. Details.", writer, i))
                            .unwrap();
                        assert_eq!(entry.title(), format!("{} wrote {}.", writer, i));
                    }
                });
            }
        });

        assert_eq!(store.get("j").unwrap().entries().len(), 10);
    }

    #[test]
    fn test_add_entry_requires_password() {
        let temp = TempDir::new().unwrap();
        let store = JournalStore::new(FileSystemRepository::new(temp.path().to_path_buf()));
        CreateJournalService::new(&store)
            .execute("j", None, "pw")
            .unwrap();

        assert!(matches!(
            AddEntryService::new(&store).execute("j", None, "nope", "Hi. There."),
            Err(LogbookError::Unauthorized(_))
        ));
        assert!(store.get("j").unwrap().entries().is_empty());
    }
}
