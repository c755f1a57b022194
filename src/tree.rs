//! Constituency tree representation and navigation.
//!
//! Trees follow the Penn-treebank convention the upstream parser emits: an
//! interior node carries a phrase label ("NP", "VP", "PP"), a preterminal
//! carries a part-of-speech label with a single leaf child, and a leaf's
//! label *is* its surface text.
//!
//! Parent pointers are not stored. The tree is singly rooted and acyclic, so
//! "parent of" is a relation recoverable by searching down from the root;
//! lookups are O(depth) over single-sentence trees, which is cheap enough.

use serde::{Deserialize, Serialize};

/// A node in a constituency parse tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    /// Phrase or part-of-speech label for interior nodes, surface text for
    /// leaves.
    pub label: String,
    /// Ordered children; empty for leaves.
    pub children: Vec<Tree>,
    /// Stable 0-based position of this leaf in the root's left-to-right leaf
    /// sequence, assigned once when the sentence is built. `None` on
    /// interior nodes.
    pub leaf_index: Option<usize>,
}

impl Tree {
    /// Create an interior node.
    pub fn node(label: impl Into<String>, children: Vec<Tree>) -> Self {
        Tree {
            label: label.into(),
            children,
            leaf_index: None,
        }
    }

    /// Create a leaf whose label is its surface text.
    pub fn leaf(text: impl Into<String>) -> Self {
        Tree {
            label: text.into(),
            children: Vec::new(),
            leaf_index: None,
        }
    }

    /// Create a preterminal: a part-of-speech node over a single leaf.
    pub fn preterminal(pos: impl Into<String>, text: impl Into<String>) -> Self {
        Tree::node(pos, vec![Tree::leaf(text)])
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Case-insensitive label comparison, the structural-match primitive.
    pub fn label_equals(&self, label: &str) -> bool {
        self.label.eq_ignore_ascii_case(label)
    }

    /// Leaves of this subtree in left-to-right order.
    pub fn leaves(&self) -> Vec<&Tree> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'t>(&'t self, out: &mut Vec<&'t Tree>) {
        if self.is_leaf() {
            out.push(self);
            return;
        }
        for child in &self.children {
            child.collect_leaves(out);
        }
    }

    /// First leaf of this subtree, or `None` if the subtree is empty of
    /// leaves (never the case for parser output, but not an invariant worth
    /// panicking over).
    pub fn first_leaf(&self) -> Option<&Tree> {
        if self.is_leaf() {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.first_leaf())
    }

    /// Surface text of this subtree: leaf texts joined by single spaces.
    pub fn text(&self) -> String {
        self.leaves()
            .iter()
            .map(|l| l.label.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Assign stable leaf indices in left-to-right order. Called once when a
    /// [`crate::Sentence`] takes ownership of the tree.
    pub fn index_leaves(&mut self) {
        let mut next = 0;
        self.index_leaves_from(&mut next);
    }

    fn index_leaves_from(&mut self, next: &mut usize) {
        if self.is_leaf() {
            self.leaf_index = Some(*next);
            *next += 1;
            return;
        }
        for child in &mut self.children {
            child.index_leaves_from(next);
        }
    }
}

/// Direct parent of `node` within `root`'s subtree, or `None` when `node` is
/// `root` itself or not part of the tree. Matches by node identity, so two
/// structurally equal subtrees in different positions stay distinct.
pub fn parent_of<'t>(root: &'t Tree, node: &Tree) -> Option<&'t Tree> {
    if root.children.iter().any(|c| std::ptr::eq(c, node)) {
        return Some(root);
    }
    root.children.iter().find_map(|c| parent_of(c, node))
}

/// Ancestor `n` generations above `node`, or `None` when `n` exceeds the
/// node's depth below `root`.
pub fn parent_at_depth<'t>(root: &'t Tree, node: &'t Tree, n: usize) -> Option<&'t Tree> {
    let mut current = node;
    for _ in 0..n {
        current = parent_of(root, current)?;
    }
    Some(current)
}

/// Nearest ancestor of `node` (including `node` itself) whose label matches
/// `label` case-insensitively. Walks upward one generation at a time;
/// reaching `root` without a match means "not found": `root` itself is
/// never returned.
pub fn ancestor_with_label<'t>(root: &'t Tree, node: &'t Tree, label: &str) -> Option<&'t Tree> {
    let mut current = node;
    while !current.label_equals(label) {
        current = parent_of(root, current)?;
        if std::ptr::eq(current, root) {
            return None;
        }
    }
    Some(current)
}

/// 0-based position of `leaf` in `root`'s leaf sequence.
///
/// Leaves carry their index from parse time; the stored index is validated
/// against the root's leaf sequence so a leaf from a *different* tree (or an
/// unindexed one) yields `None` rather than a bogus position.
pub fn leaf_index(root: &Tree, leaf: &Tree) -> Option<usize> {
    let index = leaf.leaf_index?;
    let leaves = root.leaves();
    match leaves.get(index) {
        Some(found) if found.label == leaf.label => Some(index),
        _ => None,
    }
}
