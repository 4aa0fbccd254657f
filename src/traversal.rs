//! Traversal orders shared by every [`Tree`].
//!
//! All of these iterators keep their pending subtrees in an explicit stack or queue, so walking
//! a very deep tree never grows the call stack. Each one borrows the tree it walks: the shape seen
//! by an iterator is the shape the tree had when the iterator was created.

use std::collections::VecDeque;

use crate::tree::Tree;

/// Pre-order walk over the subtrees of a tree, paired with their depth relative to the starting
/// node. This is the building block for the metrics of [`Tree`].
pub(crate) struct Nodes<'a, T> {
    stack: Vec<(usize, &'a T)>,
}

impl<'a, T: Tree> Nodes<'a, T> {
    pub(crate) fn new(tree: &'a T) -> Self {
        Self {
            stack: vec![(0, tree)],
        }
    }
}

impl<'a, T: Tree> Iterator for Nodes<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Reversed so the leftmost child is popped first.
        self.stack
            .extend(node.forest().into_iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}

/// Iterator over the values of a tree in pre-order: a node, then each of its children's
/// subtrees from left to right.
///
/// Created by [`Tree::prefix`].
pub struct Prefix<'a, T> {
    nodes: Nodes<'a, T>,
}

impl<'a, T: Tree> Prefix<'a, T> {
    pub(crate) fn new(tree: &'a T) -> Self {
        Self {
            nodes: Nodes::new(tree),
        }
    }
}

impl<'a, T: Tree> Iterator for Prefix<'a, T> {
    type Item = &'a T::Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|(_, node)| node.root())
    }
}

/// Iterator over the values of a tree in post-order: each child's subtree from left to right,
/// then the node itself.
///
/// Created by [`Tree::suffix`].
pub struct Suffix<'a, T> {
    /// Pending nodes, flagged once their children have been pushed above them.
    stack: Vec<(&'a T, bool)>,
}

impl<'a, T: Tree> Suffix<'a, T> {
    pub(crate) fn new(tree: &'a T) -> Self {
        Self {
            stack: vec![(tree, false)],
        }
    }
}

impl<'a, T: Tree> Iterator for Suffix<'a, T> {
    type Item = &'a T::Value;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node.root());
            }

            let children = node.forest();
            if children.is_empty() {
                return Some(node.root());
            }
            self.stack.push((node, true));
            self.stack
                .extend(children.into_iter().rev().map(|child| (child, false)));
        }
    }
}

/// Iterator over the values of a tree level by level, each level from left to right.
///
/// Created by [`Tree::breadth`].
pub struct Breadth<'a, T> {
    queue: VecDeque<&'a T>,
}

impl<'a, T: Tree> Breadth<'a, T> {
    pub(crate) fn new(tree: &'a T) -> Self {
        Self {
            queue: VecDeque::from([tree]),
        }
    }
}

impl<'a, T: Tree> Iterator for Breadth<'a, T> {
    type Item = &'a T::Value;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.forest());
        Some(node.root())
    }
}
