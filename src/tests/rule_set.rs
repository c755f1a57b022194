//! Running several rules over one sentence and unioning their outputs.

use super::fixtures::{george_washington, lincoln, FixtureRealizer};
use crate::{DateParentheticalRule, LocationRule, QuestionRule, RegexDateRecognizer, RuleSet};

#[test]
fn rules_union_over_a_shared_sentence() {
    let realizer = FixtureRealizer;
    let dates = RegexDateRecognizer::new();
    let rules = RuleSet::new(vec![
        QuestionRule::Location(LocationRule::new(&realizer)),
        QuestionRule::DateParenthetical(DateParentheticalRule::new(&dates)),
    ]);

    let from_lincoln: Vec<String> = rules.generate_questions(&lincoln()).into_iter().collect();
    assert_eq!(
        from_lincoln,
        vec![
            "When did Abraham Lincoln die?",
            "When was Abraham Lincoln born?",
        ]
    );

    let from_washington: Vec<String> = rules
        .generate_questions(&george_washington())
        .into_iter()
        .collect();
    assert_eq!(from_washington, vec!["Where was George Washington born?"]);
}
