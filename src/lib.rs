//! This crate exposes a small family of trees and a fixed capacity hash table, mostly for
//! educational purposes.
//!
//! ## Trees
//!
//! A tree is a data structure made of `Node`s. Every `Node` stores a value (its "root") and an
//! ordered sequence of child trees (its "forest"). A `Node` without children is called a "leaf".
//! The trees of this crate are never empty: the smallest tree is a single leaf.
//!
//! The [`Tree`] trait captures that shape. Anything that can hand out its root and its forest
//! gets the rest for free:
//!
//! - metrics: [`node_count`](Tree::node_count), [`leaf_count`](Tree::leaf_count),
//!   [`height`](Tree::height) and [`mean_height`](Tree::mean_height);
//! - traversals: [`prefix`](Tree::prefix) (a node, then its children's subtrees),
//!   [`suffix`](Tree::suffix) (the children's subtrees, then the node) and
//!   [`breadth`](Tree::breadth) (level by level).
//!
//! None of these recurse, so a tree degenerated into a very long chain is walked just as safely
//! as a balanced one.
//!
//! [`NaryTree`] is the plain implementation: any number of children, freely editable.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a binary tree supporting operations to insert, find, and delete
//! stored keys. Its most important invariants are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a key less than its
//!    own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a key greater than
//!    its own key.
//!
//! Searching for a key takes `O(height)`. With clever construction the height of a BST can be
//! limited to `O(lg N)`; [`SearchTree`] makes no such effort, so inserting sorted keys builds a
//! chain. It also naturally supports sorted iteration by visiting the left subtree, then the
//! subtree root, then the right subtree (see [`SearchTree::in_order`]).
//!
//! ## Hash table
//!
//! [`CollisionTable`] is a key-value map with a fixed number of slots, set when it is created.
//! Colliding keys are chained through an overflow area (the "cellar") and then through the free
//! slots of the table, so a table with `N` slots holds exactly `N` entries before
//! [`put`](CollisionTable::put) starts failing.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod bst;
pub mod error;
pub mod hash_table;
pub mod traversal;
pub mod tree;
mod util;


pub use bst::SearchTree;
pub use error::{TableError, TreeError};
pub use hash_table::{CollisionTable, TableConfig};
pub use tree::{NaryTree, Tree};
