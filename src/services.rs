//! External collaborator contracts.
//!
//! The statistical parsing pipeline, named-entity tagger and surface
//! realizer live outside this crate. They appear here as explicitly
//! constructed service objects passed by reference into whatever needs
//! them: no global singletons, no ambient state. Implementations pay their
//! one-time model-loading cost at construction.

use crate::error::ParseResult;
use crate::sentence::{NamedEntity, Sentence};
use once_cell::sync::Lazy;
use regex::Regex;

/// The parsing pipeline: raw text to a fully annotated [`Sentence`].
///
/// Implementations must guarantee the tree's leaves correspond 1:1, in
/// order, to the tokenization behind the dependency indices and token tags.
pub trait Parser {
    fn parse(&self, text: &str) -> ParseResult<Sentence>;
}

/// A fresh named-entity pass over arbitrary text, one tag per token.
pub trait EntityTagger {
    fn tag_tokens(&self, text: &str) -> Vec<NamedEntity>;
}

/// Lenient date-string recognition ("March 3, 1847", "1809", ranges).
pub trait DateRecognizer {
    fn is_date(&self, text: &str) -> bool;
}

/// Surface realization of a WHERE-interrogative from a verb phrase and a
/// subject noun phrase. The realizer owns the exact wording of the question;
/// the rule engine's contract ends at the extracted pair.
pub trait Realizer {
    fn realize_where_question(&self, verb_phrase: &str, subject: &str) -> String;
}

const MONTH: &str = "(?:january|february|march|april|may|june|july|august|september|october|\
                     november|december|jan|feb|mar|apr|jun|jul|aug|sep|sept|oct|nov|dec)";

static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // "March 3, 1847", "March 3 1847", "Feb. 12, 1809"
        format!(r"^{MONTH}\.?\s+\d{{1,2}}(?:st|nd|rd|th)?(?:\s*,\s*|\s+)\d{{3,4}}$"),
        // "March 1847"
        format!(r"^{MONTH}\.?\s+\d{{3,4}}$"),
        // "March 3"
        format!(r"^{MONTH}\.?\s+\d{{1,2}}(?:st|nd|rd|th)?$"),
        // "3 March 1847", "3 March"
        format!(r"^\d{{1,2}}(?:st|nd|rd|th)?\s+{MONTH}\.?(?:(?:\s*,\s*|\s+)\d{{3,4}})?$"),
        // bare year
        r"^\d{3,4}$".to_string(),
        // "3/14/1847", "14-03-1847"
        r"^\d{1,2}[/.-]\d{1,2}[/.-]\d{2,4}$".to_string(),
    ]
    .iter()
    .map(|pattern| Regex::new(&format!("(?i){pattern}")).expect("date pattern compiles"))
    .collect()
});

/// Default [`DateRecognizer`] backed by a small set of regexes over common
/// English date formats. Deliberately lenient; false positives on bare
/// numbers are acceptable for the two-dates-in-a-parenthetical check.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexDateRecognizer;

impl RegexDateRecognizer {
    pub fn new() -> Self {
        RegexDateRecognizer
    }
}

impl DateRecognizer for RegexDateRecognizer {
    fn is_date(&self, text: &str) -> bool {
        let text = text.trim();
        !text.is_empty() && DATE_PATTERNS.iter().any(|re| re.is_match(text))
    }
}
