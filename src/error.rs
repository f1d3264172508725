//! Error types for the PH-tree core.
//!
//! Not-found conditions are represented with `Option`, not an error variant;
//! everything here is either a caller mistake (dimension mismatch) or a
//! broken invariant that indicates a bug in this crate.

use thiserror::Error;

/// Errors the PH-tree core can report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PhTreeError {
    /// A key with the wrong number of dimensions was passed to a tree.
    #[error("key has {actual} dimensions, tree expects {expected}")]
    DimensionMismatch {
        /// Dimensionality the tree was created with.
        expected: usize,
        /// Dimensionality of the offending key.
        actual: usize,
    },

    /// A structural invariant was violated. Indicates a bug in this crate
    /// rather than a caller error.
    #[error("PH-tree invariant violated: {0}")]
    InvariantViolation(&'static str),
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, PhTreeError>;
