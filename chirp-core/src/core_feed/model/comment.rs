//! Comment model
//!
//! Unlike tweets, comments are hard-deleted: a removed comment leaves the
//! live list entirely. Its id is never reassigned because the per-tweet
//! sequence counter only moves forward.

use super::types::{AccountId, CommentId, TweetId};
use serde::{Deserialize, Serialize};

/// A comment on a tweet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Formatted id: `comment-{tweetId}-{seq}`
    pub id: CommentId,

    /// The tweet this comment belongs to
    pub tweet_id: TweetId,

    /// Account that wrote the comment; sole basis for delete authorization
    pub author: AccountId,

    /// Comment body
    pub text: String,
}

impl Comment {
    /// Create a new comment
    pub fn new(id: CommentId, tweet_id: TweetId, author: AccountId, text: String) -> Self {
        Comment {
            id,
            tweet_id,
            author,
            text,
        }
    }
}
