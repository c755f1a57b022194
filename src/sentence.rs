//! The shared sentence representation rules operate over.
//!
//! A [`Sentence`] bundles one constituency tree, the typed dependency edges,
//! and the named-entity annotations the upstream pipeline produced for a
//! single sentence. It is built once and never mutated; rules take it by
//! shared reference.

use crate::tree::{self, Tree};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Named-entity category of a token or span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedEntity {
    Person,
    Location,
    Date,
    Time,
    Other,
}

/// A typed grammatical relation between two tokens, identified by their
/// stable leaf indices.
///
/// `long_name` is the human-readable relation name ("nominal passive
/// subject", "auxiliary"); rules match on it by lowercase substring, the way
/// the upstream dependency scheme intends coarse matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    /// Leaf index of the governing token.
    pub governor: usize,
    /// Leaf index of the dependent token.
    pub dependent: usize,
    /// Short relation label, e.g. "nsubj", "auxpass".
    pub relation: String,
    /// Long relation name, e.g. "nominal subject", "passive auxiliary".
    pub long_name: String,
}

impl DependencyEdge {
    pub fn new(
        governor: usize,
        dependent: usize,
        relation: impl Into<String>,
        long_name: impl Into<String>,
    ) -> Self {
        DependencyEdge {
            governor,
            dependent,
            relation: relation.into(),
            long_name: long_name.into(),
        }
    }

    /// Lowercase-substring match against the long relation name.
    pub fn long_name_contains(&self, fragment: &str) -> bool {
        self.long_name.to_lowercase().contains(fragment)
    }
}

/// One parsed sentence: constituency tree, dependencies, entity annotations
/// and the original surface text.
///
/// Entity spans are keyed by exact joined surface text: the same fragile
/// contract the upstream tagger exposes. A miss because of a spacing or
/// punctuation mismatch reads as "no entity", never as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    text: String,
    root: Tree,
    dependencies: Vec<DependencyEdge>,
    entity_spans: HashMap<String, NamedEntity>,
    token_tags: Vec<NamedEntity>,
}

impl Sentence {
    /// Assemble a sentence from pipeline output. Leaf indices are assigned
    /// here, making the tree the authority on token order; `token_tags`
    /// must align 1:1 with the tree's leaf sequence.
    pub fn new(
        text: impl Into<String>,
        mut root: Tree,
        dependencies: Vec<DependencyEdge>,
        entity_spans: HashMap<String, NamedEntity>,
        token_tags: Vec<NamedEntity>,
    ) -> Self {
        root.index_leaves();
        Sentence {
            text: text.into(),
            root,
            dependencies,
            entity_spans,
            token_tags,
        }
    }

    /// The original raw sentence string.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Root of the constituency tree.
    pub fn root(&self) -> &Tree {
        &self.root
    }

    pub fn dependencies(&self) -> &[DependencyEdge] {
        &self.dependencies
    }

    /// Entity category for an exact surface-text span, if the tagger
    /// produced one.
    pub fn entity_span(&self, text: &str) -> Option<NamedEntity> {
        self.entity_spans.get(text).copied()
    }

    /// Entity tag of the token at `index`.
    pub fn token_tag(&self, index: usize) -> Option<NamedEntity> {
        self.token_tags.get(index).copied()
    }

    /// Surface text of the token at `index`.
    pub fn token(&self, index: usize) -> Option<&str> {
        self.root
            .leaves()
            .get(index)
            .map(|leaf| leaf.label.as_str())
    }

    pub fn token_count(&self) -> usize {
        self.root.leaves().len()
    }

    /// Dependency edges governed by the token at `leaf_index`.
    pub fn dependencies_for_leaf(&self, leaf_index: usize) -> Vec<&DependencyEdge> {
        self.dependencies
            .iter()
            .filter(|edge| edge.governor == leaf_index)
            .collect()
    }

    /// Text of the nearest noun phrase containing the token at `leaf_index`,
    /// used to resolve a dependency participant to a full NP. `None` when
    /// the token sits under no NP below the root.
    pub fn noun_phrase_for_leaf(&self, leaf_index: usize) -> Option<String> {
        let leaves = self.root.leaves();
        let leaf = leaves.get(leaf_index)?;
        tree::ancestor_with_label(&self.root, leaf, "NP").map(|np| np.text())
    }
}
