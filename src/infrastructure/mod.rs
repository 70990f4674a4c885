//! Infrastructure layer - Configuration, persistence and the journal store

pub mod config;
pub mod repository;
pub mod store;

pub use config::Config;
pub use repository::{FileSystemRepository, JournalRepository};
pub use store::JournalStore;
