//! Feed change events
//!
//! Events are emitted after each successful mutation so external observers
//! (UI, indexers) can react. Publication is fire-and-forget: a committed
//! state change is never rolled back because nobody was listening.

use crate::core_feed::model::{AccountId, CommentId, TweetId};
use serde::{Deserialize, Serialize};

mod broadcaster;

pub use broadcaster::EventBus;

/// Structured change event published after a successful mutation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedEvent {
    /// A tweet was created
    AddTweet {
        author: AccountId,
        tweet_id: TweetId,
    },

    /// A tweet's soft-delete flag was flipped
    DeleteTweet {
        tweet_id: TweetId,
        deleted: bool,
    },

    /// A like was toggled; `liked` is the resulting membership state
    LikeTweet {
        tweet_id: TweetId,
        liked: bool,
    },

    /// A comment was added to a tweet
    CommentTweet {
        tweet_id: TweetId,
        comment_id: CommentId,
    },

    /// A comment was removed by its author
    DeleteComment {
        comment_id: CommentId,
        removed: bool,
    },
}
