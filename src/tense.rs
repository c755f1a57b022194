//! Tense classification of a clause.
//!
//! Classifies by the part-of-speech of the clause's first token: a modal
//! ("will", "shall") reads as future, a past-tense or past-participle verb
//! form as past, anything else as present. Coarse, but the clauses handed to
//! it are verb-initial fragments where the first token is the finite verb.

use crate::error::{ParseError, ParseResult};
use crate::services::Parser;
use crate::tree;
use serde::{Deserialize, Serialize};

/// Grammatical tense of a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tense {
    Past,
    Present,
    Future,
}

/// Tense of `clause`, decided from its first preterminal label.
pub fn tense_of(parser: &dyn Parser, clause: &str) -> ParseResult<Tense> {
    let sentence = parser.parse(clause)?;
    let root = sentence.root();
    let first_leaf = root.first_leaf().ok_or(ParseError::Empty)?;
    let pos = tree::parent_of(root, first_leaf)
        .map(|preterminal| preterminal.label.to_lowercase())
        .unwrap_or_default();

    Ok(match pos.as_str() {
        "md" => Tense::Future,
        "vbd" | "vbn" => Tense::Past,
        _ => Tense::Present,
    })
}
