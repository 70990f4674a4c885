//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{AuthArgs, Cli, Commands};
pub use output::{format_entry, format_journal, format_journal_list};
