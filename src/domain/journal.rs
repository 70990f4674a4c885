//! Journal aggregate root

use crate::domain::{Credential, Entry};
use crate::error::{LogbookError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Journal identifiers: 1 to 20 word characters
fn name_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\w{1,20}$").unwrap())
}

/// Validated journal identifier, also used as the backing file stem
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JournalName(String);

impl JournalName {
    pub fn parse(name: &str) -> Result<Self> {
        if name_regex().is_match(name) {
            Ok(JournalName(name.to_string()))
        } else {
            Err(LogbookError::InvalidName(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for JournalName {
    type Err = LogbookError;

    fn from_str(s: &str) -> Result<Self> {
        JournalName::parse(s)
    }
}

impl fmt::Display for JournalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named, credential-protected, append-only sequence of entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journal {
    name: JournalName,
    credential: Credential,
    username: Option<String>,
    entries: Vec<Entry>,
}

impl Journal {
    /// Create an empty journal
    pub fn new(name: JournalName, credential: Credential) -> Self {
        Journal {
            name,
            credential,
            username: None,
            entries: Vec::new(),
        }
    }

    /// Attach a username that must accompany the credential
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Return a copy with `entry` appended
    pub fn with_entry(&self, entry: Entry) -> Self {
        let mut staged = self.clone();
        staged.entries.push(entry);
        staged
    }

    /// Return a copy with the credential replaced
    pub fn with_credential(&self, credential: Credential) -> Self {
        let mut staged = self.clone();
        staged.credential = credential;
        staged
    }

    pub(crate) fn push_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn name(&self) -> &JournalName {
        &self.name
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}
