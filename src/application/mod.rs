//! Application layer - Use cases and orchestration

pub mod access;
pub mod add_entry;
pub mod change_password;
pub mod create_journal;
pub mod init;
pub mod list_journals;
pub mod manage_config;

pub use access::AccessService;
pub use add_entry::AddEntryService;
pub use change_password::ChangePasswordService;
pub use create_journal::CreateJournalService;
pub use init::InitService;
pub use list_journals::list_journals;
pub use manage_config::ConfigService;
