//! Birth/death questions from biographical parentheticals.

use crate::ner;
use crate::rules::Rule;
use crate::sentence::Sentence;
use crate::services::DateRecognizer;
use crate::tree::Tree;
use std::collections::BTreeSet;
use tracing::debug;

/// Detects a person-referring noun phrase immediately followed by a
/// parenthetical holding two dash-separated dates (the conventional
/// "Name (born - died)" pattern) and asks when the person was born and
/// when they died.
///
/// The parenthetical node is conventionally `[ "(" , content , ")" ]`, so
/// the date search runs over its middle child. Matches at every nesting
/// level are collected; traversal never stops early.
pub struct DateParentheticalRule<'a> {
    dates: &'a dyn DateRecognizer,
}

impl<'a> DateParentheticalRule<'a> {
    pub fn new(dates: &'a dyn DateRecognizer) -> Self {
        DateParentheticalRule { dates }
    }

    fn process_tree(&self, node: &Tree, sentence: &Sentence, questions: &mut BTreeSet<String>) {
        for pair in node.children.windows(2) {
            let (child, next) = (&pair[0], &pair[1]);
            if !child.label_equals("NP") || !ner::is_person_phrase(sentence, child) {
                continue;
            }
            debug!(np = %child.text(), "found a person NP");
            if next.label_equals("PRN")
                && next
                    .children
                    .get(1)
                    .map_or(false, |content| self.contains_two_dates(content))
            {
                debug!("neighbor is a parenthetical with two dates");
                construct_questions(child, questions);
            }
        }

        for child in &node.children {
            self.process_tree(child, sentence, questions);
        }
    }

    /// Whether the parenthetical content splits on dashes into at least two
    /// date-like parts.
    fn contains_two_dates(&self, content: &Tree) -> bool {
        let text = content.text();
        debug!(text = %text, "searching parenthetical for dates");
        let dates_found = text
            .split(|c: char| c == '-' || c == '\u{2013}')
            .map(|part| part.trim().replace(" ,", ","))
            .filter(|part| self.dates.is_date(part))
            .count();
        debug!(dates_found, "parenthetical date scan done");
        dates_found >= 2
    }
}

fn construct_questions(person_np: &Tree, questions: &mut BTreeSet<String>) {
    let person = person_np.text();
    let birth = format!("When was {person} born?");
    let death = format!("When did {person} die?");
    debug!(question = %birth, "question generated");
    debug!(question = %death, "question generated");
    questions.insert(birth);
    questions.insert(death);
}

impl Rule for DateParentheticalRule<'_> {
    fn generate_questions(&self, sentence: &Sentence) -> BTreeSet<String> {
        let mut questions = BTreeSet::new();
        debug!(sentence = %sentence.text(), "starting parenthetical date scan");
        self.process_tree(sentence.root(), sentence, &mut questions);
        debug!(count = questions.len(), "ending parenthetical date scan");
        questions
    }
}
