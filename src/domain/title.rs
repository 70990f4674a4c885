//! Title extraction from raw submitted text

use crate::domain::entry::fold_lines;
use crate::error::{LogbookError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Shortest prefix ending at '.', '?' or '!', then the rest after any whitespace
fn sentence_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(.*?[.?!])\s*(.*)$").unwrap())
}

/// Strategy turning one raw submission into a `(title, body)` pair
pub trait TitleSplitter: Send + Sync {
    fn split(&self, raw: &str) -> Result<(String, String)>;
}

/// Cuts the title at the first sentence-terminal mark.
///
/// No abbreviation or locale handling: "Dr. Who arrived." yields the title
/// "Dr.". Input lines are folded into one before splitting.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSplitter;

impl TitleSplitter for SentenceSplitter {
    fn split(&self, raw: &str) -> Result<(String, String)> {
        let folded = fold_lines(raw);

        let caps = sentence_regex().captures(&folded).ok_or_else(|| {
            LogbookError::Validation(
                "Entry text has no sentence-ending punctuation ('.', '?' or '!')".to_string(),
            )
        })?;

        Ok((caps[1].trim().to_string(), caps[2].to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(raw: &str) -> Result<(String, String)> {
        SentenceSplitter.split(raw)
    }

    #[test]
    fn test_splits_at_first_period() {
        let (title, body) = split("This is a sentence. And more.").unwrap();
        assert_eq!(title, "This is a sentence.");
        assert_eq!(body, "And more.");
    }

    #[test]
    fn test_question_and_exclamation_marks() {
        assert_eq!(
            split("Why not? Because.").unwrap(),
            ("Why not?".to_string(), "Because.".to_string())
        );
        assert_eq!(
            split("Wow!   So much space").unwrap(),
            ("Wow!".to_string(), "So much space".to_string())
        );
    }

    #[test]
    fn test_first_mark_wins() {
        let (title, body) = split("Dr. Who arrived. Then left.").unwrap();
        assert_eq!(title, "Dr.");
        assert_eq!(body, "Who arrived. Then left.");
    }

    #[test]
    fn test_mark_inside_word() {
        let (title, body) = split("Visited example.com today").unwrap();
        assert_eq!(title, "Visited example.");
        assert_eq!(body, "com today");
    }

    #[test]
    fn test_multiline_input_is_folded() {
        let (title, body) = split("Long day\nat work. Went home\nearly.").unwrap();
        assert_eq!(title, "Long day at work.");
        assert_eq!(body, "Went home early.");
    }

    #[test]
    fn test_title_only_leaves_empty_body() {
        let (title, body) = split("Just a title.").unwrap();
        assert_eq!(title, "Just a title.");
        assert!(body.is_empty());
    }

    #[test]
    fn test_no_terminator_is_rejected() {
        match split("no terminator here") {
            Err(LogbookError::Validation(msg)) => assert!(msg.contains("punctuation")),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(split(""), Err(LogbookError::Validation(_))));
    }
}
