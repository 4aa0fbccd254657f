//! The generic tree capability and a multi-way tree implementing it.
//!
//! A tree here is never empty: every node holds a value (its "root") and an ordered forest of
//! child trees, each owned by its parent. Everything else (counts, heights, traversals) is derived
//! from that shape by the provided methods of [`Tree`].
//!
//! # Examples
//!
//! ```
//! use arbres::tree::{NaryTree, Tree};
//!
//! //      a
//! //    /   \
//! //   b     c
//! //   |
//! //   d
//! let tree = NaryTree::with_forest(
//!     'a',
//!     vec![NaryTree::with_forest('b', vec![NaryTree::new('d')]), NaryTree::new('c')],
//! );
//!
//! assert_eq!(tree.node_count(), 4);
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.prefix().collect::<String>(), "abdc");
//! assert_eq!(tree.suffix().collect::<String>(), "dbca");
//! assert_eq!(tree.breadth().collect::<String>(), "abcd");
//! ```

use std::mem;

use crate::error::TreeError;
use crate::traversal::{Breadth, Nodes, Prefix, Suffix};

/// A hierarchical container: a value and an ordered sequence of child trees.
///
/// Implementors only describe a single node; the metrics and traversals are provided in terms
/// of [`root`](Tree::root) and [`forest`](Tree::forest) and walk the tree iteratively.
pub trait Tree: Sized {
    /// The type of value held by each node.
    type Value;

    /// The value held by this node.
    fn root(&self) -> &Self::Value;

    /// Replaces the value held by this node and returns the previous one.
    ///
    /// Trees whose values encode their structure (like a search tree's keys) refuse with
    /// [`TreeError::Unsupported`] and are left untouched.
    fn set_root(&mut self, value: Self::Value) -> Result<Self::Value, TreeError>;

    /// The children of this node, from left to right. This is a fresh read-only view: changing
    /// it does not change the tree.
    fn forest(&self) -> Vec<&Self>;

    /// Whether this node has no children.
    fn is_leaf(&self) -> bool {
        self.forest().is_empty()
    }

    /// The number of nodes in this tree, itself included.
    fn node_count(&self) -> usize {
        Nodes::new(self).count()
    }

    /// The number of leaves in this tree. A leaf counts itself.
    fn leaf_count(&self) -> usize {
        Nodes::new(self).filter(|(_, node)| node.is_leaf()).count()
    }

    /// The number of edges on the longest path from this node down to a leaf. A leaf has a
    /// height of 0.
    fn height(&self) -> usize {
        Nodes::new(self)
            .map(|(depth, _)| depth)
            .max()
            .unwrap_or_default()
    }

    /// The mean depth of the leaves of this tree, relative to this node.
    ///
    /// Every leaf weighs the same: this is not the mean of the children's mean heights.
    fn mean_height(&self) -> f64 {
        let (leaves, total_depth) = Nodes::new(self)
            .filter(|(_, node)| node.is_leaf())
            .fold((0usize, 0usize), |(leaves, total), (depth, _)| {
                (leaves + 1, total + depth)
            });
        // There is always at least one leaf.
        total_depth as f64 / leaves as f64
    }

    /// Iterates over the values in pre-order.
    fn prefix(&self) -> Prefix<'_, Self> {
        Prefix::new(self)
    }

    /// Iterates over the values in post-order.
    fn suffix(&self) -> Suffix<'_, Self> {
        Suffix::new(self)
    }

    /// Iterates over the values level by level.
    fn breadth(&self) -> Breadth<'_, Self> {
        Breadth::new(self)
    }

    /// Calls `f` on every value in pre-order.
    fn for_each_prefix<F>(&self, f: F)
    where
        F: FnMut(&Self::Value),
    {
        self.prefix().for_each(f);
    }

    /// Calls `f` on every value in post-order.
    fn for_each_suffix<F>(&self, f: F)
    where
        F: FnMut(&Self::Value),
    {
        self.suffix().for_each(f);
    }

    /// Calls `f` on every value level by level.
    fn for_each_breadth<F>(&self, f: F)
    where
        F: FnMut(&Self::Value),
    {
        self.breadth().for_each(f);
    }
}

/// A tree whose nodes may have any number of children.
///
/// Unlike [`SearchTree`](crate::bst::SearchTree), the children of a `NaryTree` are plain
/// storage the caller may edit through [`children_mut`](NaryTree::children_mut).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NaryTree<V> {
    value: V,
    forest: Vec<NaryTree<V>>,
}

impl<V> NaryTree<V> {
    /// Creates a leaf holding `value`.
    pub fn new(value: V) -> Self {
        Self::with_forest(value, Vec::new())
    }

    /// Creates a tree holding `value` with the given children, in order.
    pub fn with_forest(value: V, forest: Vec<NaryTree<V>>) -> Self {
        Self { value, forest }
    }

    /// The children of this node.
    pub fn children(&self) -> &[NaryTree<V>] {
        &self.forest
    }

    /// The children of this node, open for editing.
    ///
    /// ```
    /// use arbres::tree::{NaryTree, Tree};
    ///
    /// let mut tree = NaryTree::new("value");
    /// assert!(tree.is_leaf());
    ///
    /// tree.children_mut().push(NaryTree::new("value2"));
    /// assert!(!tree.is_leaf());
    /// ```
    pub fn children_mut(&mut self) -> &mut Vec<NaryTree<V>> {
        &mut self.forest
    }

    /// Appends `child` as the new rightmost child of this node.
    pub fn push(&mut self, child: NaryTree<V>) -> &mut Self {
        self.forest.push(child);
        self
    }
}

impl<V> Tree for NaryTree<V> {
    type Value = V;

    fn root(&self) -> &V {
        &self.value
    }

    fn set_root(&mut self, value: V) -> Result<V, TreeError> {
        Ok(mem::replace(&mut self.value, value))
    }

    fn forest(&self) -> Vec<&Self> {
        self.forest.iter().collect()
    }
}

impl<V> Drop for NaryTree<V> {
    fn drop(&mut self) {
        // Detach every descendant before it is dropped so dropping stays flat.
        let mut pending = mem::take(&mut self.forest);
        while let Some(mut child) = pending.pop() {
            pending.append(&mut child.forest);
        }
    }
}

impl<'a, V> IntoIterator for &'a NaryTree<V> {
    type Item = &'a V;
    type IntoIter = Prefix<'a, NaryTree<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.prefix()
    }
}
