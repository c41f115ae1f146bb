//! chirp-core - Entity store and authorization engine for a small
//! social-posting system.
//!
//! The crate owns the relational core: tweets with monotonically assigned
//! ids, toggleable per-tweet likes, ordered per-tweet comments, and
//! per-account profiles. Callers arrive already authenticated; transport,
//! session handling, and persistence backends live outside this crate.

pub mod config;
pub mod core_feed;
pub mod logging;

pub use config::Config;
pub use core_feed::events::{EventBus, FeedEvent};
pub use core_feed::model::{AccountId, Comment, CommentId, Profile, Tweet, TweetId};
pub use core_feed::store::{FeedError, FeedResult};
pub use core_feed::Feed;
pub use logging::{init_logging, LogLevel};
