//! Identifier types for the feed models
//!
//! Defines:
//! - AccountId: opaque, externally-authenticated caller identity
//! - TweetId: sequential tweet identifier
//! - CommentId: formatted per-tweet comment identifier

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of an authenticated caller (e.g. an account address).
///
/// Identity resolution happens outside this crate; the store only uses the
/// value as an owner/author key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub String);

impl AccountId {
    /// Create an AccountId from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        AccountId(id.into())
    }

    /// Get the underlying string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        AccountId(s.to_string())
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        AccountId(s)
    }
}

/// Sequential tweet identifier.
///
/// Assigned at creation as the number of tweets that existed before the new
/// one, so ids are contiguous from 0 and never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TweetId(pub u64);

impl TweetId {
    /// Get the raw id value
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    pub(crate) fn as_index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TweetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TweetId {
    fn from(id: u64) -> Self {
        TweetId(id)
    }
}

/// Comment identifier of the form `comment-{tweetId}-{seq}`.
///
/// `seq` is a per-tweet monotonic counter that starts at 0 and is never
/// reused, even after the comment it named is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentId(pub String);

impl CommentId {
    /// Format a comment id from its tweet and per-tweet sequence number
    pub fn new(tweet_id: TweetId, seq: u64) -> Self {
        CommentId(format!("comment-{}-{}", tweet_id, seq))
    }

    /// Get the underlying string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CommentId {
    fn from(s: &str) -> Self {
        CommentId(s.to_string())
    }
}
