//! Tweet model
//!
//! A tweet records its author at creation time; authorship is immutable.
//! Tweets are never physically removed - deletion flips the `deleted` flag
//! and the record stays visible in full listings.

use super::types::{AccountId, TweetId};
use serde::{Deserialize, Serialize};

/// An authored post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    /// Sequential id, equal to the insertion sequence number at creation
    pub id: TweetId,

    /// Account that created the tweet; never changes
    pub author: AccountId,

    /// Post body (empty text is permitted)
    pub text: String,

    /// Soft-delete flag; the record is retained either way
    pub deleted: bool,

    /// Current number of likers
    pub like_count: u64,

    /// Current number of live comments
    pub comment_count: u64,
}

impl Tweet {
    /// Create a new tweet with zeroed counts
    pub fn new(id: TweetId, author: AccountId, text: String, deleted: bool) -> Self {
        Tweet {
            id,
            author,
            text,
            deleted,
            like_count: 0,
            comment_count: 0,
        }
    }
}
