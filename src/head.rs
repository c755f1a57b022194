//! Head-percolation rules for constituency trees.
//!
//! A fixed per-label table (Collins-style head rules) maps a phrase label to
//! which child is its head: a search direction plus a priority list of child
//! labels. NP gets its own multi-pass rule. Labels outside the table fall
//! back to the directional default (leftmost child). Deterministic: there
//! is no ambiguity resolution beyond the table.

use crate::tree::Tree;
use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
}

struct HeadRule {
    direction: Direction,
    priority: &'static [&'static str],
}

static HEAD_RULES: Lazy<HashMap<&'static str, HeadRule>> = Lazy::new(|| {
    fn rule(
        rules: &mut HashMap<&'static str, HeadRule>,
        label: &'static str,
        direction: Direction,
        priority: &'static [&'static str],
    ) {
        rules.insert(label, HeadRule { direction, priority });
    }

    let mut map = HashMap::new();
    let rules = &mut map;

    rule(
        rules,
        "ADJP",
        Direction::Left,
        &[
            "NNS", "QP", "NN", "$", "ADVP", "JJ", "VBN", "VBG", "ADJP", "JJR", "NP", "JJS", "DT",
            "FW", "RBR", "RBS", "SBAR", "RB",
        ],
    );
    rule(
        rules,
        "ADVP",
        Direction::Right,
        &["RB", "RBR", "RBS", "FW", "ADVP", "TO", "CD", "JJR", "JJ", "IN", "NP", "JJS", "NN"],
    );
    rule(rules, "CONJP", Direction::Right, &["CC", "RB", "IN"]);
    rule(rules, "FRAG", Direction::Right, &[]);
    rule(rules, "INTJ", Direction::Left, &[]);
    rule(rules, "LST", Direction::Right, &["LS", ":"]);
    rule(
        rules,
        "NAC",
        Direction::Left,
        &[
            "NN", "NNS", "NNP", "NNPS", "NP", "NAC", "EX", "$", "CD", "QP", "PRP", "VBG", "JJ",
            "JJS", "JJR", "ADJP", "FW",
        ],
    );
    rule(rules, "PP", Direction::Right, &["IN", "TO", "VBG", "VBN", "RP", "FW"]);
    rule(rules, "PRN", Direction::Left, &[]);
    rule(rules, "PRT", Direction::Right, &["RP"]);
    rule(
        rules,
        "QP",
        Direction::Left,
        &["$", "IN", "NNS", "NN", "JJ", "RB", "DT", "CD", "NCD", "QP", "JJR", "JJS"],
    );
    rule(rules, "RRC", Direction::Right, &["VP", "NP", "ADVP", "ADJP", "PP"]);
    rule(rules, "S", Direction::Left, &["TO", "IN", "VP", "S", "SBAR", "ADJP", "UCP", "NP"]);
    rule(
        rules,
        "SBAR",
        Direction::Left,
        &["WHNP", "WHPP", "WHADVP", "WHADJP", "IN", "DT", "S", "SQ", "SINV", "SBAR", "FRAG"],
    );
    rule(rules, "SBARQ", Direction::Left, &["SQ", "S", "SINV", "SBARQ", "FRAG"]);
    rule(
        rules,
        "SINV",
        Direction::Left,
        &["VBZ", "VBD", "VBP", "VB", "MD", "VP", "S", "SINV", "ADJP", "NP"],
    );
    rule(rules, "SQ", Direction::Left, &["VBZ", "VBD", "VBP", "VB", "MD", "VP", "SQ"]);
    rule(rules, "UCP", Direction::Right, &[]);
    rule(
        rules,
        "VP",
        Direction::Left,
        &["TO", "VBD", "VBN", "MD", "VBZ", "VB", "VBG", "VBP", "VP", "ADJP", "NN", "NNS", "NP"],
    );
    rule(rules, "WHADJP", Direction::Left, &["CC", "WRB", "JJ", "ADJP"]);
    rule(rules, "WHADVP", Direction::Right, &["CC", "WRB"]);
    rule(rules, "WHNP", Direction::Left, &["WDT", "WP", "WP$", "WHADJP", "WHPP", "WHNP"]);
    rule(rules, "WHPP", Direction::Right, &["IN", "TO", "FW"]);

    map
});

/// The immediate head child of `tree` per the percolation table, or `None`
/// for leaves.
pub fn head_child(tree: &Tree) -> Option<&Tree> {
    if tree.is_leaf() {
        return None;
    }
    if tree.children.len() == 1 {
        return tree.children.first();
    }
    if tree.label_equals("NP") {
        return np_head(tree);
    }

    let label = tree.label.to_ascii_uppercase();
    match HEAD_RULES.get(label.as_str()) {
        Some(rule) => {
            for wanted in rule.priority {
                let found = match rule.direction {
                    Direction::Left => tree.children.iter().find(|c| c.label_equals(wanted)),
                    Direction::Right => tree.children.iter().rev().find(|c| c.label_equals(wanted)),
                };
                if let Some(child) = found {
                    return Some(child);
                }
            }
            match rule.direction {
                Direction::Left => tree.children.first(),
                Direction::Right => tree.children.last(),
            }
        }
        // default for unknown labels
        None => tree.children.first(),
    }
}

/// NP head rule: rightmost nominal, then leftmost nested NP, then a cascade
/// of weaker candidates, then the last child.
fn np_head(np: &Tree) -> Option<&Tree> {
    const NOMINAL: [&str; 7] = ["NN", "NNP", "NNPS", "NNS", "NX", "POS", "JJR"];
    const WEAK: [&str; 3] = ["$", "ADJP", "PRN"];
    const WEAKER: [&str; 4] = ["JJ", "JJS", "RB", "QP"];

    np.children
        .iter()
        .rev()
        .find(|c| NOMINAL.iter().any(|l| c.label_equals(l)))
        .or_else(|| np.children.iter().find(|c| c.label_equals("NP")))
        .or_else(|| {
            np.children
                .iter()
                .rev()
                .find(|c| WEAK.iter().any(|l| c.label_equals(l)))
        })
        .or_else(|| np.children.iter().rev().find(|c| c.label_equals("CD")))
        .or_else(|| {
            np.children
                .iter()
                .rev()
                .find(|c| WEAKER.iter().any(|l| c.label_equals(l)))
        })
        .or_else(|| np.children.last())
}

/// The head leaf of `tree`: repeated [`head_child`] until a leaf is reached.
pub fn head_leaf(tree: &Tree) -> Option<&Tree> {
    let mut current = tree;
    while !current.is_leaf() {
        current = head_child(current)?;
    }
    Some(current)
}
