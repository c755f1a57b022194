//! Scenario tests for the appositive/relative-clause simplifier, mirroring
//! the behavior the component was specified against.

use super::fixtures::FixtureParser;
use crate::AppositiveAndRelativeClauseSimplifier;

fn simplify(text: &str) -> String {
    let parser = FixtureParser;
    AppositiveAndRelativeClauseSimplifier::new(&parser)
        .simplify(text)
        .unwrap()
}

#[test]
fn simple_appositive() {
    assert_eq!(
        simplify("Bob Jones, my dear friend, likes cats."),
        "Bob Jones likes cats."
    );
}

#[test]
fn simple_relative_clause() {
    assert_eq!(
        simplify("Bob Jones, who was my dear friend, likes cats."),
        "Bob Jones likes cats."
    );
}

#[test]
fn appositive_with_list_conjunction() {
    // the list commas in the object must survive
    insta::assert_snapshot!(
        simplify("Jefferson, the third U.S. president, loved to eat apples, peaches, and oranges."),
        @"Jefferson loved to eat apples, peaches, and oranges."
    );
}

#[test]
fn relative_clause_with_list_conjunction() {
    assert_eq!(
        simplify("Jefferson, who was the third president, loved to eat apples, peaches, and oranges."),
        "Jefferson loved to eat apples, peaches, and oranges."
    );
}

#[test]
fn appositives_in_both_conjuncts() {
    assert_eq!(
        simplify("Washington, the first president, and Jefferson, the third president, were friends."),
        "Washington and Jefferson were friends."
    );
}

#[test]
fn relative_clauses_in_both_conjuncts() {
    assert_eq!(
        simplify("Washington, who was the first president, and Jefferson, who was the third president, were friends."),
        "Washington and Jefferson were friends."
    );
}

#[test]
fn mixed_relative_clause_and_appositive() {
    insta::assert_snapshot!(
        simplify("Washington, who was the first president, and Jefferson, the third president, were friends."),
        @"Washington and Jefferson were friends."
    );
}

#[test]
fn identity_on_plain_sentences() {
    assert_eq!(
        simplify("George Washington was born in Virginia"),
        "George Washington was born in Virginia"
    );
    assert_eq!(simplify("Bob Jones likes cats."), "Bob Jones likes cats.");
}

#[test]
fn simplification_is_idempotent() {
    let inputs = [
        "Bob Jones, my dear friend, likes cats.",
        "Bob Jones, who was my dear friend, likes cats.",
        "Jefferson, the third U.S. president, loved to eat apples, peaches, and oranges.",
        "Washington, who was the first president, and Jefferson, the third president, were friends.",
        "George Washington was born in Virginia",
    ];
    for input in inputs {
        let once = simplify(input);
        assert_eq!(simplify(&once), once, "not idempotent for {input:?}");
    }
}
