//! Rule-based question generation over constituency parses.
//!
//! Turns declarative sentences into natural-language questions by pattern
//! matching over a syntactic parse tree and a dependency list, then realizing
//! a question from the matched constituents:
//!
//! - [`LocationRule`]: "George Washington was born in Virginia" =>
//!   "Where was George Washington born?"
//! - [`DateParentheticalRule`]: "Abraham Lincoln (February 12, 1809 –
//!   April 15, 1865) …" => "When was Abraham Lincoln born?" /
//!   "When did Abraham Lincoln die?"
//! - [`AppositiveAndRelativeClauseSimplifier`]: "Bob Jones, my dear friend,
//!   likes cats." => "Bob Jones likes cats."
//!
//! The statistical parser/tagger pipeline and the surface realizer are
//! external collaborators behind explicit service traits ([`Parser`],
//! [`EntityTagger`], [`DateRecognizer`], [`Realizer`]); this crate is
//! the matching and extraction engine between them. Rules share one
//! immutable [`Sentence`] snapshot, are side-effect-free, and report
//! diagnostics through `tracing` events that never affect returned results.

mod error;
mod head;
mod ner;
mod rules;
mod sentence;
mod services;
mod simplification;
mod tense;
mod tree;

pub use error::{ParseError, ParseResult};
pub use head::{head_child, head_leaf};
pub use ner::{
    head_is_date_or_time, head_is_location, head_is_person, is_date_or_time, is_location,
    is_person, is_person_phrase, is_person_text, wh_word_for,
};
pub use rules::{DateParentheticalRule, LocationRule, QuestionRule, Rule, RuleSet};
pub use sentence::{DependencyEdge, NamedEntity, Sentence};
pub use services::{DateRecognizer, EntityTagger, Parser, Realizer, RegexDateRecognizer};
pub use simplification::AppositiveAndRelativeClauseSimplifier;
pub use tense::{tense_of, Tense};
pub use tree::{ancestor_with_label, leaf_index, parent_at_depth, parent_of, Tree};
