use std::cmp::Ordering;

/// The child of a search tree node a key belongs under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    /// Keys smaller than the node's key.
    Left,
    /// Keys greater than the node's key.
    Right,
}

impl Side {
    /// Which side of `node_key` the given `key` goes to, or `None` when they are equal.
    pub(crate) fn of<K: Ord>(key: &K, node_key: &K) -> Option<Self> {
        match key.cmp(node_key) {
            Ordering::Less => Some(Self::Left),
            Ordering::Equal => None,
            Ordering::Greater => Some(Self::Right),
        }
    }
}
