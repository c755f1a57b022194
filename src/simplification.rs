//! Removal of non-restrictive appositives and relative clauses.
//!
//! "Bob Jones, my dear friend, likes cats." carries a comma-bounded
//! appositive that adds incidental information; dropping it leaves the core
//! assertion intact. The simplifier parses the sentence, prunes every such
//! modifier, and re-joins the surviving tokens with repaired punctuation.

use crate::error::ParseResult;
use crate::services::Parser;
use crate::tree::Tree;
use tracing::debug;

/// Relative pronouns that can introduce a non-restrictive relative clause.
/// "that" is normally restrictive, but in comma-bounded position it is
/// treated like the others.
const RELATIVE_PRONOUNS: [&str; 5] = ["who", "whom", "whose", "which", "that"];

/// Removes non-restrictive appositive noun phrases and non-restrictive
/// relative clauses from raw sentence text.
///
/// Matching is tree-shaped: a noun phrase whose children are exactly
/// `[NP, ",", modifier, ","]`, where the modifier is an appositive NP or a
/// relative clause introduced by a relative pronoun. The head NP is kept,
/// the modifier and both bounding commas are dropped. Every such
/// construction in the sentence is pruned, including one per conjunct in a
/// coordinated sentence; input with no such construction passes through
/// unchanged, so the transform is idempotent.
pub struct AppositiveAndRelativeClauseSimplifier<'a> {
    parser: &'a dyn Parser,
}

impl<'a> AppositiveAndRelativeClauseSimplifier<'a> {
    pub fn new(parser: &'a dyn Parser) -> Self {
        AppositiveAndRelativeClauseSimplifier { parser }
    }

    /// Simplified sentence text. The only failure mode is the injected
    /// parser failing; a sentence with nothing to remove comes back as-is.
    pub fn simplify(&self, text: &str) -> ParseResult<String> {
        let sentence = self.parser.parse(text)?;
        let mut kept = Vec::new();
        collect_kept_tokens(sentence.root(), &mut kept);
        let simplified = detokenize(&kept);
        if simplified != text {
            debug!(original = text, simplified = %simplified, "removed non-restrictive modifier(s)");
        }
        Ok(simplified)
    }
}

fn collect_kept_tokens<'t>(node: &'t Tree, out: &mut Vec<&'t str>) {
    if node.is_leaf() {
        out.push(node.label.as_str());
        return;
    }
    if let Some(head) = modified_head(node) {
        // keep the head NP, drop the comma-bounded modifier
        collect_kept_tokens(head, out);
        return;
    }
    for child in &node.children {
        collect_kept_tokens(child, out);
    }
}

/// If `node` is a noun phrase of the shape `[NP, ",", modifier, ","]` with a
/// removable modifier, returns the head NP.
fn modified_head(node: &Tree) -> Option<&Tree> {
    if !node.label_equals("NP") {
        return None;
    }
    let [head, open, modifier, close] = node.children.as_slice() else {
        return None;
    };
    if head.label_equals("NP")
        && is_comma(open)
        && is_comma(close)
        && (is_appositive(modifier) || is_nonrestrictive_relative_clause(modifier))
    {
        Some(head)
    } else {
        None
    }
}

fn is_comma(node: &Tree) -> bool {
    node.text() == ","
}

/// An appositive modifier is itself a noun phrase (no relative pronoun).
fn is_appositive(node: &Tree) -> bool {
    node.label_equals("NP")
}

/// A relative clause (SBAR) whose first word is a relative pronoun. The
/// comma bounds checked by the caller make it non-restrictive.
fn is_nonrestrictive_relative_clause(node: &Tree) -> bool {
    if !node.label_equals("SBAR") {
        return false;
    }
    node.first_leaf()
        .map(|leaf| {
            let lower = leaf.label.to_lowercase();
            RELATIVE_PRONOUNS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

/// Join tokens back into surface text: single spaces between words, no space
/// before closing punctuation, none after an opening bracket.
fn detokenize(tokens: &[&str]) -> String {
    let mut text = String::new();
    for token in tokens {
        let no_space_before = matches!(
            *token,
            "," | "." | "!" | "?" | ";" | ":" | ")" | "]" | "%" | "'s" | "n't" | "''"
        );
        let after_opener = matches!(text.chars().last(), Some('(') | Some('['));
        if !text.is_empty() && !no_space_before && !after_opener {
            text.push(' ');
        }
        text.push_str(token);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detokenize_repairs_punctuation() {
        assert_eq!(
            detokenize(&["Bob", "Jones", "likes", "cats", "."]),
            "Bob Jones likes cats."
        );
        assert_eq!(
            detokenize(&["apples", ",", "peaches", ",", "and", "oranges", "."]),
            "apples, peaches, and oranges."
        );
        assert_eq!(detokenize(&["(", "1809", ")"]), "(1809)");
        assert_eq!(detokenize(&[]), "");
    }

    #[test]
    fn relative_clause_detection_requires_pronoun() {
        let with_pronoun = Tree::node(
            "SBAR",
            vec![
                Tree::node("WHNP", vec![Tree::preterminal("WP", "who")]),
                Tree::node("S", vec![Tree::preterminal("VBD", "was")]),
            ],
        );
        let without = Tree::node(
            "SBAR",
            vec![
                Tree::preterminal("IN", "because"),
                Tree::node("S", vec![Tree::preterminal("VBD", "was")]),
            ],
        );
        assert!(is_nonrestrictive_relative_clause(&with_pronoun));
        assert!(!is_nonrestrictive_relative_clause(&without));
    }

    #[test]
    fn list_nps_are_not_appositive_shapes() {
        // "apples , peaches , and oranges": six children, not the
        // four-child appositive shape
        let list = Tree::node(
            "NP",
            vec![
                Tree::node("NP", vec![Tree::preterminal("NNS", "apples")]),
                Tree::preterminal(",", ","),
                Tree::node("NP", vec![Tree::preterminal("NNS", "peaches")]),
                Tree::preterminal(",", ","),
                Tree::preterminal("CC", "and"),
                Tree::node("NP", vec![Tree::preterminal("NNS", "oranges")]),
            ],
        );
        assert!(modified_head(&list).is_none());
    }

    #[test]
    fn appositive_shape_is_pruned() {
        let np = Tree::node(
            "NP",
            vec![
                Tree::node(
                    "NP",
                    vec![
                        Tree::preterminal("NNP", "Bob"),
                        Tree::preterminal("NNP", "Jones"),
                    ],
                ),
                Tree::preterminal(",", ","),
                Tree::node(
                    "NP",
                    vec![
                        Tree::preterminal("PRP$", "my"),
                        Tree::preterminal("JJ", "dear"),
                        Tree::preterminal("NN", "friend"),
                    ],
                ),
                Tree::preterminal(",", ","),
            ],
        );
        let head = modified_head(&np).expect("appositive shape matches");
        assert_eq!(head.text(), "Bob Jones");

        let mut kept = Vec::new();
        collect_kept_tokens(&np, &mut kept);
        assert_eq!(kept, vec!["Bob", "Jones"]);
    }
}
