//! Domain layer - Journal model, file format and title extraction

pub mod codec;
pub mod credential;
pub mod entry;
pub mod journal;
pub mod title;

pub use credential::{Credential, Verification};
pub use entry::Entry;
pub use journal::{Journal, JournalName};
pub use title::{SentenceSplitter, TitleSplitter};
