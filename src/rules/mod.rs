//! Question-generation rules.
//!
//! Each rule scans a [`Sentence`]'s constituency tree for one syntactic
//! configuration and, on match, extracts the constituents needed to build a
//! question. Rules never mutate the sentence and never fail: a tree that
//! matches nothing yields the empty set.

mod date_parenthetical;
mod location;

pub use date_parenthetical::DateParentheticalRule;
pub use location::LocationRule;

use crate::sentence::Sentence;
use std::collections::BTreeSet;

/// A question-generation rule over a parsed sentence.
///
/// Returns the set of generated question strings: deduplicated by set
/// semantics, insertion order irrelevant.
pub trait Rule {
    fn generate_questions(&self, sentence: &Sentence) -> BTreeSet<String>;
}

/// The closed set of question rules.
///
/// Rules are a fixed enumeration, not an open plugin surface; dispatch is
/// over this enum.
pub enum QuestionRule<'a> {
    Location(LocationRule<'a>),
    DateParenthetical(DateParentheticalRule<'a>),
}

impl Rule for QuestionRule<'_> {
    fn generate_questions(&self, sentence: &Sentence) -> BTreeSet<String> {
        match self {
            QuestionRule::Location(rule) => rule.generate_questions(sentence),
            QuestionRule::DateParenthetical(rule) => rule.generate_questions(sentence),
        }
    }
}

/// An ordered collection of rules whose results are unioned.
pub struct RuleSet<'a> {
    rules: Vec<QuestionRule<'a>>,
}

impl<'a> RuleSet<'a> {
    pub fn new(rules: Vec<QuestionRule<'a>>) -> Self {
        RuleSet { rules }
    }

    /// Run every rule over `sentence` and union the generated questions.
    pub fn generate_questions(&self, sentence: &Sentence) -> BTreeSet<String> {
        self.rules
            .iter()
            .flat_map(|rule| rule.generate_questions(sentence))
            .collect()
    }
}
