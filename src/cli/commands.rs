//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "logbook")]
#[command(about = "Password-protected personal journals stored as flat text files", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Credentials for an existing journal
#[derive(Args, Debug)]
pub struct AuthArgs {
    /// Journal password
    #[arg(short, long, env = "LOGBOOK_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Username, required when the journal has one
    #[arg(short, long)]
    pub username: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new logbook workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Directory holding journal files, relative to the workspace
        #[arg(long, default_value = "journals")]
        journal_dir: PathBuf,

        /// Journal file extension
        #[arg(long, default_value = "txt")]
        extension: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Create a new journal
    Create {
        /// Journal name (1-20 letters, digits or underscores)
        name: String,

        /// Password protecting the journal
        #[arg(short, long, env = "LOGBOOK_PASSWORD", hide_env_values = true)]
        password: String,

        /// Optional username that must accompany the password
        #[arg(short, long)]
        username: Option<String>,
    },

    /// Show the entries of a journal
    Show {
        name: String,

        #[command(flatten)]
        auth: AuthArgs,

        /// Only show the most recent N entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Add an entry; the title is the text up to the first '.', '?' or '!'
    Add {
        name: String,

        #[command(flatten)]
        auth: AuthArgs,

        /// Entry text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Change the password of a journal
    Passwd {
        name: String,

        #[command(flatten)]
        auth: AuthArgs,

        /// New password
        #[arg(long)]
        new: String,

        /// New password again
        #[arg(long)]
        confirm: String,
    },

    /// List journals in the workspace
    List,
}
