//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Violations of the tree invariants, reported by [`AvlTree::check`].
///
/// `position` is the in-order index of the offending node.
///
/// [`AvlTree::check`]: crate::domain::AvlTree::check
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("in-order sequence not strictly increasing at position {position}")]
    OutOfOrder { position: usize },

    #[error("stored height {stored} at position {position}, expected {expected}")]
    HeightMismatch {
        position: usize,
        stored: usize,
        expected: usize,
    },

    #[error("balance factor {balance} at position {position} exceeds 1")]
    Unbalanced { position: usize, balance: i32 },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
