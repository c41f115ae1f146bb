//! Store layer for the feed subsystem
//!
//! Each store owns its own state behind one lock and can be addressed
//! independently; the like and comment stores hold a tweet-store handle to
//! validate ids and write back derived counts.

pub mod auth;
pub mod comment_store;
pub mod errors;
pub mod like_registry;
pub mod profile_store;
pub mod tweet_store;

pub use comment_store::CommentStore;
pub use errors::{FeedError, FeedResult};
pub use like_registry::LikeRegistry;
pub use profile_store::ProfileStore;
pub use tweet_store::TweetStore;
