//! Error types for the feed stores
//!
//! All failures are reported synchronously to the caller. A failed call
//! leaves no partial state behind and never corrupts state visible to
//! subsequent calls.

use std::sync::PoisonError;
use thiserror::Error;

/// Errors that can occur in the feed stores
#[derive(Debug, Error)]
pub enum FeedError {
    /// Referenced tweet or comment does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller is not the author of the resource being deleted
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A store lock was poisoned by a panicking thread
    #[error("Lock poisoned: {0}")]
    Poisoned(String),
}

/// Result type for feed store operations
pub type FeedResult<T> = Result<T, FeedError>;

/// Helper to convert poison errors into FeedError
pub(crate) fn handle_poison<T>(_err: PoisonError<T>) -> FeedError {
    FeedError::Poisoned("a thread panicked while holding a store lock".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FeedError::NotFound("tweet 7".to_string());
        assert_eq!(format!("{}", err), "Not found: tweet 7");

        let err = FeedError::Unauthorized("comment-0-0".to_string());
        assert_eq!(format!("{}", err), "Unauthorized: comment-0-0");
    }
}
