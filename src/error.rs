//! Error types for failed accesses.

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Hard failures reported to the caller.
///
/// Rejected duplicate inserts and erasing an absent value are not errors;
/// they are reported through the `bool`/`usize` returns of those operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An element was requested from an empty container
    #[error("{op}() called on an empty container")]
    Empty { op: &'static str },

    /// `at` was called with a key that is not in the map
    #[error("key not found")]
    KeyNotFound,
}
