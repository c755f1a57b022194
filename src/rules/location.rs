//! "Where ...?" questions from locative prepositional phrases.

use crate::rules::Rule;
use crate::sentence::{NamedEntity, Sentence};
use crate::services::Realizer;
use crate::tree::{self, Tree};
use std::collections::BTreeSet;
use tracing::debug;

/// Detects prepositional phrases headed by "in" whose object is a LOCATION
/// entity and whose parent is a verb phrase, then asks *where* the event
/// happened.
///
/// Extraction on match: the verb is the VP's first leaf; its governing
/// dependency edges supply the subject (any "\*subj\*" relation, resolved to
/// the nearest containing NP) and an optional auxiliary (any "\*aux\*"
/// relation, prepended to the verb). The verb phrase and subject go to the
/// injected [`Realizer`], which owns the surface wording.
pub struct LocationRule<'a> {
    realizer: &'a dyn Realizer,
}

impl<'a> LocationRule<'a> {
    pub fn new(realizer: &'a dyn Realizer) -> Self {
        LocationRule { realizer }
    }

    fn process_tree(&self, node: &Tree, sentence: &Sentence, questions: &mut BTreeSet<String>) {
        if node.label_equals("PP") {
            debug!(pp = %node.text(), "found a PP");
            self.validate_pp(node, sentence, questions);
        }
        for child in &node.children {
            self.process_tree(child, sentence, questions);
        }
    }

    fn validate_pp(&self, pp: &Tree, sentence: &Sentence, questions: &mut BTreeSet<String>) {
        // preposition must be the literal "in"
        let preposition = pp.children.first().and_then(|c| c.first_leaf());
        if !matches!(preposition, Some(leaf) if leaf.label == "in") {
            return;
        }
        // the PP's object NP must be a known location span
        let Some(object) = pp.children.get(1) else {
            return;
        };
        let phrase = object.text();
        if sentence.entity_span(&phrase) != Some(NamedEntity::Location) {
            return;
        }
        debug!(object = %phrase, "PP object is a location");
        // the PP must hang off a verb phrase
        let Some(parent) = tree::parent_of(sentence.root(), pp) else {
            return;
        };
        if !parent.label_equals("vp") {
            return;
        }
        debug!("PP contained within a VP");
        self.construct_question(parent, sentence, questions);
    }

    fn construct_question(&self, vp: &Tree, sentence: &Sentence, questions: &mut BTreeSet<String>) {
        let Some(verb_leaf) = vp.children.first().and_then(|c| c.first_leaf()) else {
            return;
        };
        let mut verb = verb_leaf.label.clone();

        let mut subject = String::new();
        if let Some(verb_index) = tree::leaf_index(sentence.root(), verb_leaf) {
            for edge in sentence.dependencies_for_leaf(verb_index) {
                if edge.long_name_contains("subj") {
                    subject = sentence
                        .noun_phrase_for_leaf(edge.dependent)
                        .unwrap_or_default();
                }
                if edge.long_name_contains("aux") {
                    if let Some(aux) = sentence.token(edge.dependent) {
                        verb = format!("{aux} {verb}");
                    }
                }
            }
        }
        if subject.is_empty() {
            // no subject dependency found; the realizer gets an empty
            // subject rather than the rule failing
            debug!(verb = %verb, "no subject resolved for matched VP");
        }

        let question = self.realizer.realize_where_question(&verb, &subject);
        debug!(question = %question, "question generated");
        questions.insert(question);
    }
}

impl Rule for LocationRule<'_> {
    fn generate_questions(&self, sentence: &Sentence) -> BTreeSet<String> {
        let mut questions = BTreeSet::new();
        debug!(sentence = %sentence.text(), "starting location scan");
        self.process_tree(sentence.root(), sentence, &mut questions);
        debug!(count = questions.len(), "ending location scan");
        questions
    }
}
