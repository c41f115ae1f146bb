//! Data models for the feed subsystem

pub mod comment;
pub mod profile;
pub mod tweet;
pub mod types;

pub use comment::Comment;
pub use profile::Profile;
pub use tweet::Tweet;
pub use types::{AccountId, CommentId, TweetId};
