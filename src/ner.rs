//! Entity classification over sentences and subtrees.
//!
//! Thin classification layer on top of the tagger output carried by a
//! [`Sentence`]: index-based person/location/date checks with a small closed
//! set of personal-pronoun overrides, head-based classification of whole
//! subtrees, and who/what selection for question building.

use crate::head;
use crate::sentence::{NamedEntity, Sentence};
use crate::services::EntityTagger;
use crate::tree::{self, Tree};
use tracing::warn;

/// Personal pronouns treated as PERSON regardless of tagger output. The
/// tagger only marks names; these are the anaphoric cases rules still need
/// to classify.
const PERSON_WORDS: [&str; 4] = ["he", "she", "him", "her"];

/// Whether any token of `text` is tagged PERSON by a fresh tagger pass.
pub fn is_person_text(tagger: &dyn EntityTagger, text: &str) -> bool {
    tagger
        .tag_tokens(text)
        .iter()
        .any(|tag| *tag == NamedEntity::Person)
}

/// Whether the token at `index` refers to a person.
pub fn is_person(sentence: &Sentence, index: usize) -> bool {
    if let Some(word) = sentence.token(index) {
        let lower = word.to_lowercase();
        if PERSON_WORDS.contains(&lower.as_str()) {
            return true;
        }
    }
    sentence.token_tag(index) == Some(NamedEntity::Person)
}

/// Whether the token at `index` names a location.
pub fn is_location(sentence: &Sentence, index: usize) -> bool {
    sentence.token_tag(index) == Some(NamedEntity::Location)
}

/// Whether the token at `index` is part of a date or time expression.
pub fn is_date_or_time(sentence: &Sentence, index: usize) -> bool {
    matches!(
        sentence.token_tag(index),
        Some(NamedEntity::Date) | Some(NamedEntity::Time)
    )
}

/// Leaf index of `subtree`'s head word within the sentence's tree.
///
/// Resolution can fail when the subtree was built outside the sentence's
/// tree; that is a recoverable condition: logged and treated as "cannot
/// classify", never fatal to the surrounding scan.
fn head_leaf_index(sentence: &Sentence, subtree: &Tree) -> Option<usize> {
    let head = head::head_child(subtree)?;
    let first_leaf = head.first_leaf()?;
    let index = tree::leaf_index(sentence.root(), first_leaf);
    if index.is_none() {
        warn!(
            subtree = %subtree.text(),
            sentence = %sentence.text(),
            "could not resolve head leaf index"
        );
    }
    index
}

/// Whether `subtree`'s head word refers to a person.
pub fn head_is_person(sentence: &Sentence, subtree: &Tree) -> bool {
    head_leaf_index(sentence, subtree)
        .map(|index| is_person(sentence, index))
        .unwrap_or(false)
}

/// Whether `subtree`'s head word names a location.
pub fn head_is_location(sentence: &Sentence, subtree: &Tree) -> bool {
    head_leaf_index(sentence, subtree)
        .map(|index| is_location(sentence, index))
        .unwrap_or(false)
}

/// Whether `subtree`'s head word is part of a date or time expression.
pub fn head_is_date_or_time(sentence: &Sentence, subtree: &Tree) -> bool {
    head_leaf_index(sentence, subtree)
        .map(|index| is_date_or_time(sentence, index))
        .unwrap_or(false)
}

/// Whether `subtree` refers to a person: an exact entity-span hit, any
/// PERSON-tagged token inside it (pronoun overrides included), or a
/// PERSON-classified head word.
pub fn is_person_phrase(sentence: &Sentence, subtree: &Tree) -> bool {
    if sentence.entity_span(&subtree.text()) == Some(NamedEntity::Person) {
        return true;
    }
    let any_person_token = subtree
        .leaves()
        .iter()
        .filter_map(|leaf| leaf.leaf_index)
        .any(|index| is_person(sentence, index));
    any_person_token || head_is_person(sentence, subtree)
}

/// Interrogative pronoun for `subtree`: "who" for persons, "what" otherwise.
pub fn wh_word_for(sentence: &Sentence, subtree: &Tree) -> &'static str {
    if head_is_person(sentence, subtree) {
        "who"
    } else {
        "what"
    }
}
