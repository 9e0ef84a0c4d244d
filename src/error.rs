//! Error types for exact-assign.

use thiserror::Error;

/// Result type alias using this crate's [`SolveError`].
pub type Result<T> = std::result::Result<T, SolveError>;

/// Errors that can end a solve call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The cost matrix is not square.
    ///
    /// Rejected before the search starts; the call is fatal and no partial
    /// result is produced.
    #[error("invalid cost matrix: row {row} has {got} columns, expected {expected}")]
    InvalidMatrix {
        /// Index of the offending row.
        row: usize,
        /// Expected row length (the matrix size).
        expected: usize,
        /// Actual row length.
        got: usize,
    },

    /// The search was aborted through a [`CancelToken`](crate::CancelToken).
    ///
    /// Distinguishable from invalid input: the caller may retry with a
    /// larger budget.
    #[error("search cancelled before completion")]
    Cancelled,
}
