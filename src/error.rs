//! Error types for logbook

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for logbook
#[derive(Debug, Error)]
pub enum LogbookError {
    #[error("Journal not found: {0}")]
    NotFound(String),

    #[error("Malformed journal file (line {line}): {message}")]
    Format { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid journal name: '{0}'")]
    InvalidName(String),

    #[error("Unauthorized access to journal: {0}")]
    Unauthorized(String),

    #[error("Journal already exists: {0}")]
    AlreadyExists(String),

    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not a logbook directory: {0}")]
    NotLogbookDirectory(PathBuf),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl LogbookError {
    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        LogbookError::Format {
            line,
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            LogbookError::NotFound(_) => 2,
            LogbookError::NotLogbookDirectory(_) => 3,
            LogbookError::Unauthorized(_) => 4,
            LogbookError::Validation(_) | LogbookError::InvalidName(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            LogbookError::NotLogbookDirectory(path) => {
                format!(
                    "Not a logbook directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'logbook init' in this directory to create a workspace\n\
                    • Navigate to an existing logbook directory\n\
                    • Set LOGBOOK_ROOT environment variable to your workspace path",
                    path.display()
                )
            }
            LogbookError::NotFound(name) => {
                format!(
                    "Journal not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'logbook list' to see existing journals\n\
                    • Create it with: logbook create {} --password <PASSWORD>",
                    name, name
                )
            }
            LogbookError::InvalidName(name) => {
                format!(
                    "Invalid journal name: '{}'\n\n\
                    Journal names are 1 to 20 word characters (letters, digits, underscore).\n\
                    Examples: travel, work_2025, dreams",
                    name
                )
            }
            LogbookError::Validation(msg) if msg.contains("punctuation") => {
                format!(
                    "Rejected entry: {}\n\n\
                    The title is everything up to the first '.', '?' or '!'.\n\
                    Example: logbook add travel --password <PASSWORD> \"Arrived in Lisbon. The weather is great.\"",
                    msg
                )
            }
            LogbookError::Format { line, message } => {
                format!(
                    "Malformed journal file (line {}): {}\n\n\
                    Expected layout:\n\
                    password: <credential>\n\
                    YYYY-MM-DD HH:MM <title>\n\
                    <body>",
                    line, message
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using LogbookError
pub type Result<T> = std::result::Result<T, LogbookError>;
