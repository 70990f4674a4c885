//! Flat-file journal format
//!
//! ```text
//! password: <credential>
//! username: <name>            (optional)
//! YYYY-MM-DD HH:MM <title>
//! <body line>
//! <body line>
//!
//! YYYY-MM-DD HH:MM <title>
//! <body>
//! ```
//!
//! Parsing runs a small state machine over the lines: header lines first, then
//! alternating entry header / entry body states. Any structural problem aborts
//! the whole parse with a format error carrying the 1-based line number.

use crate::domain::entry::{DATE_FORMAT, DATE_WIDTH};
use crate::domain::{Credential, Entry, Journal, JournalName};
use crate::error::{LogbookError, Result};
use chrono::NaiveDateTime;

const PASSWORD_PREFIX: &str = "password: ";
const USERNAME_PREFIX: &str = "username: ";

/// Parse the contents of a journal file
pub fn parse(name: JournalName, input: &str) -> Result<Journal> {
    let mut parser = Parser::new();
    for (idx, line) in input.lines().enumerate() {
        parser.feed(idx + 1, line)?;
    }
    parser.finish(name)
}

/// Check that the header fields of `journal` can be written and read back unchanged
///
/// Header values are kept verbatim by the parser, so only blank values and
/// values spanning more than one line are refused.
pub fn check_headers(journal: &Journal) -> Result<()> {
    check_header_value("password", journal.credential().as_str())?;
    if let Some(username) = journal.username() {
        check_header_value("username", username)?;
    }
    Ok(())
}

fn check_header_value(key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LogbookError::Validation(format!(
            "Header '{}' cannot be empty",
            key
        )));
    }
    if value.contains(['\n', '\r']) {
        return Err(LogbookError::Validation(format!(
            "Header '{}' cannot contain line breaks",
            key
        )));
    }
    Ok(())
}

/// Serialize a journal into the flat-file format
pub fn serialize(journal: &Journal) -> String {
    let mut out = String::new();

    out.push_str(PASSWORD_PREFIX);
    out.push_str(journal.credential().as_str());
    out.push('\n');

    if let Some(username) = journal.username() {
        out.push_str(USERNAME_PREFIX);
        out.push_str(username);
        out.push('\n');
    }

    for entry in journal.entries() {
        out.push_str(&entry.to_string());
        out.push_str("\n\n");
    }

    out
}

#[derive(Debug)]
enum State {
    Header,
    EntryHeader,
    EntryBody {
        line: usize,
        timestamp: NaiveDateTime,
        title: String,
        body: Vec<String>,
    },
}

struct Parser {
    state: State,
    credential: Option<String>,
    username: Option<String>,
    entries: Vec<Entry>,
    last_line: usize,
}

impl Parser {
    fn new() -> Self {
        Parser {
            state: State::Header,
            credential: None,
            username: None,
            entries: Vec::new(),
            last_line: 0,
        }
    }

    fn feed(&mut self, line_no: usize, line: &str) -> Result<()> {
        self.last_line = line_no;

        match std::mem::replace(&mut self.state, State::EntryHeader) {
            State::Header => {
                if let Some(value) = line.strip_prefix(PASSWORD_PREFIX) {
                    self.set_header(line_no, "password", value, HeaderField::Credential)?;
                    self.state = State::Header;
                } else if let Some(value) = line.strip_prefix(USERNAME_PREFIX) {
                    self.set_header(line_no, "username", value, HeaderField::Username)?;
                    self.state = State::Header;
                } else {
                    if self.credential.is_none() {
                        return Err(LogbookError::format(line_no, "Missing password line"));
                    }
                    // First non-header line: reprocess it as an entry header
                    self.feed(line_no, line)?;
                }
            }
            State::EntryHeader => {
                if !is_blank(line) {
                    let (timestamp, title) = parse_entry_header(line_no, line)?;
                    self.state = State::EntryBody {
                        line: line_no,
                        timestamp,
                        title,
                        body: Vec::new(),
                    };
                }
            }
            State::EntryBody {
                line: start,
                timestamp,
                title,
                mut body,
            } => {
                if is_blank(line) {
                    self.push_entry(start, timestamp, &title, &body)?;
                } else {
                    body.push(line.trim().to_string());
                    self.state = State::EntryBody {
                        line: start,
                        timestamp,
                        title,
                        body,
                    };
                }
            }
        }

        Ok(())
    }

    fn set_header(
        &mut self,
        line_no: usize,
        key: &str,
        value: &str,
        field: HeaderField,
    ) -> Result<()> {
        if value.trim().is_empty() {
            return Err(LogbookError::format(
                line_no,
                format!("Header '{}' is empty", key),
            ));
        }

        let slot = match field {
            HeaderField::Credential => &mut self.credential,
            HeaderField::Username => &mut self.username,
        };
        if slot.is_some() {
            return Err(LogbookError::format(
                line_no,
                format!("Duplicate '{}' header", key),
            ));
        }
        *slot = Some(value.to_string());
        Ok(())
    }

    fn push_entry(
        &mut self,
        line_no: usize,
        timestamp: NaiveDateTime,
        title: &str,
        body: &[String],
    ) -> Result<()> {
        if body.is_empty() {
            return Err(LogbookError::format(line_no, "Entry body is empty"));
        }
        let entry = Entry::new(timestamp, title, &body.join(" ")).map_err(|e| match e {
            LogbookError::Validation(msg) => LogbookError::format(line_no, msg),
            other => other,
        })?;
        self.entries.push(entry);
        Ok(())
    }

    fn finish(mut self, name: JournalName) -> Result<Journal> {
        match std::mem::replace(&mut self.state, State::EntryHeader) {
            State::Header | State::EntryHeader => {}
            State::EntryBody {
                line,
                timestamp,
                title,
                body,
            } => self.push_entry(line, timestamp, &title, &body)?,
        }

        let credential = self
            .credential
            .ok_or_else(|| LogbookError::format(self.last_line.max(1), "Missing password line"))?;

        let mut journal = Journal::new(name, Credential::from_stored(credential));
        if let Some(username) = self.username {
            journal = journal.with_username(username);
        }
        for entry in self.entries {
            journal.push_entry(entry);
        }
        Ok(journal)
    }
}

#[derive(Debug, Clone, Copy)]
enum HeaderField {
    Credential,
    Username,
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Split an entry header into its fixed-width date field and title
fn parse_entry_header(line_no: usize, line: &str) -> Result<(NaiveDateTime, String)> {
    let date_field = line.get(..DATE_WIDTH).ok_or_else(|| {
        LogbookError::format(
            line_no,
            format!(
                "Entry header must start with a {}-character date (YYYY-MM-DD HH:MM)",
                DATE_WIDTH
            ),
        )
    })?;

    if !is_fixed_width_date(date_field) {
        return Err(LogbookError::format(
            line_no,
            format!("Invalid entry date: '{}'", date_field),
        ));
    }
    let timestamp = NaiveDateTime::parse_from_str(date_field, DATE_FORMAT).map_err(|e| {
        LogbookError::format(line_no, format!("Invalid entry date '{}': {}", date_field, e))
    })?;

    let rest = &line[DATE_WIDTH..];
    if rest.trim().is_empty() {
        return Err(LogbookError::format(line_no, "Entry title is empty"));
    }
    let title = rest.strip_prefix(' ').ok_or_else(|| {
        LogbookError::format(line_no, "Expected a space between the date and the title")
    })?;

    Ok((timestamp, title.trim().to_string()))
}

/// `YYYY-MM-DD HH:MM` with every digit present
fn is_fixed_width_date(field: &str) -> bool {
    field.len() == DATE_WIDTH
        && field.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            10 => b == b' ',
            13 => b == b':',
            _ => b.is_ascii_digit(),
        })
}
