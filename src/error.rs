//! Error types for the adaptive array

use std::collections::TryReserveError;

use thiserror::Error;

/// Result type for adaptive array operations
pub type Result<T> = std::result::Result<T, ArrayError>;

/// Errors reported by fallible container operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// Backing storage for `requested` slots could not be reserved
    #[error("failed to reserve storage for {requested} slots")]
    AllocationFailed {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    /// Growing to `requested` slots would pass the configured limit
    #[error("{requested} slots requested, limit is {limit}")]
    SlotLimitExceeded { requested: usize, limit: usize },

    /// `set` was called with an index below zero
    #[error("negative index {index}")]
    NegativeIndex { index: isize },
}
