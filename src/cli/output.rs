//! Output formatting utilities

use crate::domain::entry::DATE_FORMAT;
use crate::domain::{Entry, Journal, JournalName};

/// Format a journal's entries for display, oldest first.
/// With a limit, only the most recent `limit` entries are shown.
pub fn format_journal(journal: &Journal, limit: Option<usize>) -> String {
    let entries = journal.entries();
    let shown = match limit {
        Some(n) if n < entries.len() => &entries[entries.len() - n..],
        _ => entries,
    };

    let mut output = format!("{} ({})\n", journal.name(), entry_count(entries.len()));
    if shown.is_empty() {
        output.push_str("\nNo entries yet\n");
        return output;
    }

    for entry in shown {
        output.push('\n');
        output.push_str(&format_entry(entry));
    }
    output
}

/// Format a single entry: header line, then the indented body
pub fn format_entry(entry: &Entry) -> String {
    format!(
        "{}  {}\n    {}\n",
        entry.timestamp().format(DATE_FORMAT),
        entry.title(),
        entry.body()
    )
}

/// Format a list of journal names for display
pub fn format_journal_list(names: &[JournalName]) -> String {
    if names.is_empty() {
        return "No journals found".to_string();
    }

    let mut output = String::new();
    for name in names {
        output.push_str(&format!("{}\n", name));
    }
    output
}

fn entry_count(n: usize) -> String {
    if n == 1 {
        "1 entry".to_string()
    } else {
        format!("{} entries", n)
    }
}
