//! logbook - Password-protected personal journals
//!
//! Journals are named collections of dated, titled entries stored one flat
//! text file per journal. [`infrastructure::JournalStore`] is the
//! concurrency-safe, cache-through repository every front end goes through.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::LogbookError;
pub use infrastructure::JournalStore;
