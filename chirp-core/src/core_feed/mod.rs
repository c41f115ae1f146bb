/*
    core_feed - Entity store and authorization engine

    The relational core of the social-posting system. Handles:
    - Tweets with monotonically assigned ids and soft deletion
    - Per-tweet toggleable likes
    - Per-tweet ordered comments with author-gated deletion
    - Per-account profiles
    - Change-event publication after each successful mutation
*/

pub mod events;
pub mod feed;
pub mod metrics;
pub mod model;
pub mod store;

#[cfg(test)]
pub mod tests;

// Re-export commonly used types
pub use events::{EventBus, FeedEvent};
pub use feed::Feed;
pub use model::{AccountId, Comment, CommentId, Profile, Tweet, TweetId};
pub use store::{CommentStore, FeedError, FeedResult, LikeRegistry, ProfileStore, TweetStore};
