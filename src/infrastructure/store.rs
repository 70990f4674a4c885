//! Cache-through journal store
//!
//! Journals are loaded lazily from the repository on first access and kept in
//! memory afterwards. Every mutation works on a staged copy, rewrites the whole
//! journal file and only replaces the cached value once the write succeeded,
//! so the cache never holds state that failed to persist.
//!
//! One store-wide lock serializes loads and mutations. Cache hits are served
//! without taking it.

use crate::domain::{codec, Credential, Entry, Journal, JournalName, SentenceSplitter, TitleSplitter};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::{Local, NaiveDateTime};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError, RwLock};

/// Proof that the store-wide lock is held
type StoreGuard<'a> = MutexGuard<'a, ()>;

pub struct JournalStore<R = FileSystemRepository> {
    repository: R,
    splitter: Box<dyn TitleSplitter>,
    lock: Mutex<()>,
    cache: RwLock<HashMap<JournalName, Journal>>,
}

impl<R: JournalRepository> JournalStore<R> {
    /// Create a store splitting titles at the first sentence-ending mark
    pub fn new(repository: R) -> Self {
        Self::with_splitter(repository, SentenceSplitter)
    }

    /// Create a store with a custom title extraction strategy
    pub fn with_splitter(repository: R, splitter: impl TitleSplitter + 'static) -> Self {
        JournalStore {
            repository,
            splitter: Box::new(splitter),
            lock: Mutex::new(()),
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Get a journal, loading it from the repository on a cache miss
    pub fn get(&self, name: &str) -> Result<Journal> {
        let name = JournalName::parse(name)?;

        if let Some(journal) = self.cached(&name) {
            log::debug!("Cache hit for journal {}", name);
            return Ok(journal);
        }

        let guard = self.lock();
        self.resolve(&guard, &name)
    }

    /// Append an entry built from raw text, timestamped now
    pub fn add(&self, name: &str, raw: &str) -> Result<()> {
        self.add_at(name, raw, Local::now().naive_local())
    }

    /// Append an entry built from raw text with an explicit timestamp
    pub fn add_at(&self, name: &str, raw: &str, timestamp: NaiveDateTime) -> Result<()> {
        self.add_entry(name, raw, timestamp).map(|_| ())
    }

    /// Append an entry and return it exactly as committed
    pub fn add_entry(&self, name: &str, raw: &str, timestamp: NaiveDateTime) -> Result<Entry> {
        let name = JournalName::parse(name)?;

        let guard = self.lock();
        let journal = self.resolve(&guard, &name)?;

        let (title, body) = self.splitter.split(raw)?;
        let entry = Entry::new(timestamp, &title, &body)?;

        self.commit(&guard, journal.with_entry(entry.clone()))?;
        Ok(entry)
    }

    /// Persist `journal` as-is, replacing whatever is stored under its name
    pub fn put(&self, journal: Journal) -> Result<()> {
        let guard = self.lock();
        self.commit(&guard, journal)
    }

    /// Replace the stored credential of a journal
    pub fn change_password(&self, name: &str, credential: Credential) -> Result<()> {
        let name = JournalName::parse(name)?;

        let guard = self.lock();
        let journal = self.resolve(&guard, &name)?;

        self.commit(&guard, journal.with_credential(credential))
    }

    /// Replace the stored credential only if it still equals `expected`
    ///
    /// Returns `false` without writing when the credential changed since the
    /// caller read it.
    pub fn upgrade_credential(
        &self,
        name: &str,
        expected: &Credential,
        upgraded: Credential,
    ) -> Result<bool> {
        let name = JournalName::parse(name)?;

        let guard = self.lock();
        let journal = self.resolve(&guard, &name)?;
        if journal.credential() != expected {
            log::debug!("Credential of journal {} changed, skipping upgrade", name);
            return Ok(false);
        }

        self.commit(&guard, journal.with_credential(upgraded))?;
        Ok(true)
    }

    /// Whether a journal is currently held in memory
    pub fn is_cached(&self, name: &str) -> bool {
        JournalName::parse(name)
            .map(|name| self.cached(&name).is_some())
            .unwrap_or(false)
    }

    fn lock(&self) -> StoreGuard<'_> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn cached(&self, name: &JournalName) -> Option<Journal> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Cached journal, or a fresh load that populates the cache on success
    fn resolve(&self, _guard: &StoreGuard<'_>, name: &JournalName) -> Result<Journal> {
        if let Some(journal) = self.cached(name) {
            return Ok(journal);
        }

        let journal = self
            .repository
            .read_journal(name)
            .and_then(|contents| codec::parse(name.clone(), &contents))
            .map_err(|e| {
                log::warn!("Failed to load journal {}: {}", name, e);
                e
            })?;

        log::debug!(
            "Loaded journal {} with {} entries",
            name,
            journal.entries().len()
        );
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.clone(), journal.clone());

        Ok(journal)
    }

    /// Persist a staged journal, then make it the cached value
    fn commit(&self, _guard: &StoreGuard<'_>, staged: Journal) -> Result<()> {
        codec::check_headers(&staged)?;
        let contents = codec::serialize(&staged);

        self.repository
            .write_journal(staged.name(), &contents)
            .map_err(|e| {
                log::warn!("Failed to persist journal {}: {}", staged.name(), e);
                e
            })?;

        log::debug!(
            "Persisted journal {} with {} entries",
            staged.name(),
            staged.entries().len()
        );
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(staged.name().clone(), staged);

        Ok(())
    }
}
