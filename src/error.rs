//! Errors reported by the trees and the hash table.

/// Errors triggered by tree operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// The operation is not supported by this kind of tree (e.g. replacing the key of a
    /// search tree in place).
    #[error("operation not supported by this tree")]
    Unsupported,
    /// The key is the only one left in the tree and a tree cannot be empty.
    #[error("cannot remove the only node of a tree")]
    DeletionImpossible,
    /// The key is not in the tree.
    #[error("key not found in the tree")]
    NotFound,
    /// The subtrees given to a constructor would break the search tree ordering.
    #[error("subtrees are not ordered around the key")]
    Unordered,
}

/// Errors triggered by hash table operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TableError {
    /// Every slot is used and the key is not already present.
    #[error("table is full ({capacity} slots)")]
    CapacityExhausted {
        /// Total number of slots of the table.
        capacity: usize,
    },
    /// The table layout cannot address any key.
    #[error("invalid table layout: {address} address slots, {cellar} cellar slots")]
    InvalidConfig {
        /// Requested number of address slots.
        address: usize,
        /// Requested number of cellar slots.
        cellar: usize,
    },
    /// A cursor was advanced past its last entry.
    #[error("no more entries")]
    Exhausted,
    /// A cursor was asked to remove an entry it is not positioned on.
    #[error("cursor is not positioned on an entry")]
    InvalidCursorState,
}
