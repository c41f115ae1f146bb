//! Feed - wiring for the four stores
//!
//! There is no shared orchestrator at runtime; each store is independently
//! addressable. This struct only does the construction-time wiring: one
//! event bus shared by all stores, and the tweet-store handle the like and
//! comment stores need for id validation and count write-back.

use crate::config::Config;
use crate::core_feed::events::{EventBus, FeedEvent};
use crate::core_feed::store::{CommentStore, LikeRegistry, ProfileStore, TweetStore};
use tokio::sync::broadcast;

/// A fully wired feed core
#[derive(Clone)]
pub struct Feed {
    /// Tweet records and id sequence
    pub tweets: TweetStore,

    /// Per-tweet liker sets
    pub likes: LikeRegistry,

    /// Per-tweet comment threads
    pub comments: CommentStore,

    /// Per-account profiles
    pub profiles: ProfileStore,

    bus: EventBus,
}

impl Feed {
    /// Wire the stores from configuration
    pub fn new(config: &Config) -> Self {
        Self::with_bus(EventBus::new(config.store.event_capacity))
    }

    /// Wire the stores around an existing bus
    pub fn with_bus(bus: EventBus) -> Self {
        let tweets = TweetStore::new(bus.clone());
        let likes = LikeRegistry::new(tweets.clone(), bus.clone());
        let comments = CommentStore::new(tweets.clone(), bus.clone());
        let profiles = ProfileStore::new();

        Feed {
            tweets,
            likes,
            comments,
            profiles,
            bus,
        }
    }

    /// Subscribe to change events from every store
    pub fn subscribe(&self) -> broadcast::Receiver<FeedEvent> {
        self.bus.subscribe()
    }

    /// The shared event bus
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }
}

impl Default for Feed {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
