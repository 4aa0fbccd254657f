//! An unbalanced Binary Search Tree of keys.
//!
//! A [`SearchTree`] is never empty: it is a node holding a key with an optional left subtree of
//! smaller keys and an optional right subtree of greater keys. Insertion always attaches the new
//! key at the first missing child along its search path and nothing is ever rotated, so the
//! shape of the tree only depends on the order of the operations.
//!
//! # Examples
//!
//! ```
//! use arbres::bst::SearchTree;
//! use arbres::tree::Tree;
//!
//! let mut tree = SearchTree::new(2);
//! tree.insert(3).insert(4).insert(1);
//!
//! assert!(tree.contains(&4));
//! assert_eq!(tree.left().map(Tree::root), Some(&1));
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
//!
//! // Removing a key with two children promotes its predecessor.
//! tree.remove(&2).unwrap();
//! assert_eq!(tree.root(), &1);
//!
//! // But the last key of a tree can't be removed.
//! let mut single = SearchTree::new(1);
//! assert!(single.remove(&1).is_err());
//! ```

use std::mem;

use crate::error::TreeError;
use crate::traversal::Prefix;
use crate::tree::Tree;
use crate::util::Side;

/// An optional child. `None` is the only representation of a missing subtree.
type Subtree<K> = Option<Box<SearchTree<K>>>;

/// A Binary Search Tree node. Every key in its left subtree is smaller than its key and every key
/// in its right subtree is greater. Keys are unique.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTree<K> {
    key: K,
    left: Subtree<K>,
    right: Subtree<K>,
}

impl<K> SearchTree<K> {
    /// Creates a single node tree holding `key`.
    pub fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// Creates a tree holding `key` with the given subtrees.
    ///
    /// Fails with [`TreeError::Unordered`] unless every key of `left` is smaller than `key` and
    /// every key of `right` is greater.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbres::bst::SearchTree;
    /// use arbres::error::TreeError;
    ///
    /// let tree = SearchTree::with_subtrees(2, Some(SearchTree::new(1)), None).unwrap();
    /// assert!(tree.contains(&1));
    ///
    /// let err = SearchTree::with_subtrees(2, None, Some(SearchTree::new(1))).unwrap_err();
    /// assert_eq!(err, TreeError::Unordered);
    /// ```
    pub fn with_subtrees(key: K, left: Option<Self>, right: Option<Self>) -> Result<Self, TreeError>
    where
        K: Ord,
    {
        let left_fits = left.as_ref().map_or(true, |left| *left.max() < key);
        let right_fits = right.as_ref().map_or(true, |right| *right.min() > key);
        if !(left_fits && right_fits) {
            return Err(TreeError::Unordered);
        }

        Ok(Self {
            key,
            left: left.map(Box::new),
            right: right.map(Box::new),
        })
    }

    /// The left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn child(&self, side: Side) -> Option<&Self> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Subtree<K> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Finds the subtree whose root holds `key`.
    pub fn find(&self, key: &K) -> Option<&Self>
    where
        K: Ord,
    {
        let mut node = self;
        while let Some(side) = Side::of(key, &node.key) {
            node = node.child(side)?;
        }
        Some(node)
    }

    /// Whether `key` is in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// The smallest key of the tree.
    pub fn min(&self) -> &K {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        &node.key
    }

    /// The largest key of the tree.
    pub fn max(&self) -> &K {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        &node.key
    }

    /// Adds `key` to the tree, as a new leaf at the end of its search path. Nothing changes if
    /// the key is already present. Returns the tree so insertions can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbres::bst::SearchTree;
    /// use arbres::tree::Tree;
    ///
    /// let mut tree = SearchTree::new(2);
    /// tree.insert(3).insert(4).insert(5).insert(1);
    ///
    /// // Nothing is rebalanced: 3, 4 and 5 form a chain on the right.
    /// assert_eq!(tree.height(), 3);
    /// assert_eq!(tree.prefix().copied().collect::<Vec<_>>(), [2, 1, 3, 4, 5]);
    /// ```
    pub fn insert(&mut self, key: K) -> &mut Self
    where
        K: Ord,
    {
        if let Some(side) = Side::of(&key, &self.key) {
            let slot = Self::locate(self.child_mut(side), &key);
            if slot.is_none() {
                *slot = Some(Box::new(Self::new(key)));
            }
        }
        self
    }

    /// Removes `key` from the tree and returns the updated tree.
    ///
    /// A node with a single child is replaced by that child. A node with two children takes the
    /// key of its predecessor (the largest key of its left subtree), which is then removed from
    /// the left subtree.
    ///
    /// # Errors
    ///
    /// - [`TreeError::DeletionImpossible`] if `key` is the only key of the tree.
    /// - [`TreeError::NotFound`] if `key` is not in the tree.
    ///
    /// The tree is unchanged when an error is returned.
    pub fn remove(&mut self, key: &K) -> Result<&mut Self, TreeError>
    where
        K: Ord,
    {
        match Side::of(key, &self.key) {
            None => self.remove_root()?,
            Some(side) => Self::unlink(Self::locate(self.child_mut(side), key))?,
        }
        Ok(self)
    }

    /// Iterates over the keys in ascending order.
    pub fn in_order(&self) -> InOrder<'_, K> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(Some(self));
        iter
    }

    /// Walks down from `slot` towards `key`. Stops on the subtree holding `key`, or on the empty
    /// slot where it would be attached.
    fn locate<'a>(mut slot: &'a mut Subtree<K>, key: &K) -> &'a mut Subtree<K>
    where
        K: Ord,
    {
        while let Some(side) = slot.as_deref().and_then(|node| Side::of(key, &node.key)) {
            if let Some(node) = slot {
                slot = node.child_mut(side);
            }
        }
        slot
    }

    /// Walks down the right spine from `slot` to the subtree holding the largest key.
    fn rightmost(mut slot: &mut Subtree<K>) -> &mut Subtree<K> {
        while slot.as_ref().map_or(false, |node| node.right.is_some()) {
            if let Some(node) = slot {
                slot = &mut node.right;
            }
        }
        slot
    }

    /// Removes the node held in `slot`, splicing its children back in.
    fn unlink(slot: &mut Subtree<K>) -> Result<(), TreeError> {
        let node = slot.as_deref_mut().ok_or(TreeError::NotFound)?;
        if node.left.is_some() && node.right.is_some() {
            node.promote_predecessor();
        } else if let Some(mut node) = slot.take() {
            *slot = node.left.take().or_else(|| node.right.take());
        }
        Ok(())
    }

    /// Removes this node's own key, which requires at least one child to take its place.
    fn remove_root(&mut self) -> Result<(), TreeError> {
        match (self.left.is_some(), self.right.is_some()) {
            (false, false) => return Err(TreeError::DeletionImpossible),
            (true, true) => self.promote_predecessor(),
            _ => {
                if let Some(child) = self.left.take().or_else(|| self.right.take()) {
                    *self = *child;
                }
            }
        }
        Ok(())
    }

    /// Replaces this node's key with the largest key of its left subtree, removing that key's
    /// node from the left subtree. The right subtree is untouched.
    fn promote_predecessor(&mut self) {
        let slot = Self::rightmost(&mut self.left);
        if let Some(mut predecessor) = slot.take() {
            *slot = predecessor.left.take();
            // The old key leaves with the detached node.
            mem::swap(&mut self.key, &mut predecessor.key);
        }
    }
}

impl<K> Tree for SearchTree<K> {
    type Value = K;

    fn root(&self) -> &K {
        &self.key
    }

    /// Always fails: changing a key in place could break the ordering of the tree.
    fn set_root(&mut self, _value: K) -> Result<K, TreeError> {
        Err(TreeError::Unsupported)
    }

    /// The existing subtrees among `[left, right]`.
    fn forest(&self) -> Vec<&Self> {
        self.left().into_iter().chain(self.right()).collect()
    }
}

impl<K> Drop for SearchTree<K> {
    fn drop(&mut self) {
        // Detach every descendant before it is dropped so dropping stays flat.
        let mut pending: Vec<Box<Self>> =
            self.left.take().into_iter().chain(self.right.take()).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<'a, K> IntoIterator for &'a SearchTree<K> {
    type Item = &'a K;
    type IntoIter = Prefix<'a, SearchTree<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.prefix()
    }
}

/// Iterator over the keys of a [`SearchTree`] in ascending order.
///
/// Created by [`SearchTree::in_order`].
pub struct InOrder<'a, K> {
    /// Nodes whose left subtree has been pushed but whose key has not been yielded yet.
    stack: Vec<&'a SearchTree<K>>,
}

impl<'a, K> InOrder<'a, K> {
    fn push_left_spine(&mut self, mut node: Option<&'a SearchTree<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.key)
    }
}
