//! Journal entry value type

use crate::error::{LogbookError, Result};
use chrono::{NaiveDateTime, Timelike};
use std::fmt;

/// Fixed-width date format used in entry header lines
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Width of the date field at the start of an entry header line
pub const DATE_WIDTH: usize = 16;

/// One dated note: a timestamp, a single-line title and a body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    timestamp: NaiveDateTime,
    title: String,
    body: String,
}

impl Entry {
    /// Build an entry, truncating the timestamp to the minute.
    ///
    /// Multi-line bodies are folded into a single line. Fails with a
    /// validation error when the title or the body ends up empty, or when
    /// the title spans more than one line.
    pub fn new(timestamp: NaiveDateTime, title: &str, body: &str) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(LogbookError::Validation("Entry title is empty".to_string()));
        }
        if title.contains('\n') || title.contains('\r') {
            return Err(LogbookError::Validation(
                "Entry title must be a single line".to_string(),
            ));
        }

        let body = fold_lines(body);
        if body.is_empty() {
            return Err(LogbookError::Validation("Entry body is empty".to_string()));
        }

        Ok(Entry {
            timestamp: truncate_to_minute(timestamp),
            title: title.to_string(),
            body,
        })
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl fmt::Display for Entry {
    /// Header line followed by the body, as stored on disk
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}\n{}",
            self.timestamp.format(DATE_FORMAT),
            self.title,
            self.body
        )
    }
}

/// Join the non-blank lines of `text` with a single space
pub fn fold_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn truncate_to_minute(timestamp: NaiveDateTime) -> NaiveDateTime {
    timestamp
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 9)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_new_truncates_to_minute() {
        let entry = Entry::new(at(14, 30, 59), "Title.", "Body").unwrap();
        assert_eq!(entry.timestamp(), at(14, 30, 0));
    }

    #[test]
    fn test_multiline_body_is_folded() {
        let entry = Entry::new(at(8, 0, 0), "Morning.", "first line\n  second line\n\nthird").unwrap();
        assert_eq!(entry.body(), "first line second line third");
    }

    #[test]
    fn test_empty_title_rejected() {
        let result = Entry::new(at(8, 0, 0), "   ", "body");
        assert!(matches!(result, Err(LogbookError::Validation(_))));
    }

    #[test]
    fn test_multiline_title_rejected() {
        let result = Entry::new(at(8, 0, 0), "one\ntwo", "body");
        assert!(matches!(result, Err(LogbookError::Validation(_))));
    }

    #[test]
    fn test_empty_body_rejected() {
        let result = Entry::new(at(8, 0, 0), "Title.", "\n \n");
        assert!(matches!(result, Err(LogbookError::Validation(_))));
    }

    #[test]
    fn test_display_matches_file_layout() {
        let entry = Entry::new(at(9, 5, 0), "Rainy day.", "Stayed in.").unwrap();
        assert_eq!(entry.to_string(), "2025-03-09 09:05 Rainy day.\nStayed in.");
    }
}
