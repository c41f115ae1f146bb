//! Like registry
//!
//! Holds the set of likers per tweet. A like is pure set membership, so a
//! toggle is an atomic check-and-flip: modeling it as a counter would drift
//! under concurrent access. The read-then-write of membership happens under
//! one write-lock section, and the tweet's derived like count is written
//! back before that section ends, so counts follow the serialization order
//! of the toggles.

use crate::core_feed::events::{EventBus, FeedEvent};
use crate::core_feed::metrics;
use crate::core_feed::model::{AccountId, TweetId};
use crate::core_feed::store::errors::{handle_poison, FeedError, FeedResult};
use crate::core_feed::store::tweet_store::TweetStore;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Per-tweet liker sets with toggle semantics
#[derive(Clone)]
pub struct LikeRegistry {
    // Vec keeps first-like order stable for `likes()`; membership is
    // checked by scan, which is fine at per-tweet liker counts.
    likes: Arc<RwLock<HashMap<TweetId, Vec<AccountId>>>>,
    tweets: TweetStore,
    bus: EventBus,
}

impl LikeRegistry {
    /// Create a registry over the given tweet store
    pub fn new(tweets: TweetStore, bus: EventBus) -> Self {
        LikeRegistry {
            likes: Arc::new(RwLock::new(HashMap::new())),
            tweets,
            bus,
        }
    }

    /// Flip the caller's like on a tweet and return the new state.
    ///
    /// Two consecutive toggles by the same caller restore the prior
    /// membership exactly.
    pub fn toggle_like(&self, caller: &AccountId, tweet_id: TweetId) -> FeedResult<bool> {
        self.tweets.ensure_exists(tweet_id)?;

        let mut likes = self.likes.write().map_err(handle_poison)?;
        let likers = likes.entry(tweet_id).or_default();
        let liked = match likers.iter().position(|a| a == caller) {
            Some(pos) => {
                likers.remove(pos);
                false
            }
            None => {
                likers.push(caller.clone());
                true
            }
        };
        self.tweets.set_like_count(tweet_id, likers.len() as u64)?;

        self.bus.emit(FeedEvent::LikeTweet { tweet_id, liked });
        metrics::record_like_toggled();
        debug!(caller = %caller, tweet_id = %tweet_id, liked, "like toggled");
        Ok(liked)
    }

    /// Current likers of a tweet, in first-like order
    pub fn likes(&self, tweet_id: TweetId) -> FeedResult<Vec<AccountId>> {
        self.tweets.ensure_exists(tweet_id)?;
        let likes = self.likes.read().map_err(handle_poison)?;
        Ok(likes.get(&tweet_id).cloned().unwrap_or_default())
    }

    /// Whether the caller currently likes the tweet
    pub fn is_liked_by(&self, caller: &AccountId, tweet_id: TweetId) -> FeedResult<bool> {
        self.tweets.ensure_exists(tweet_id)?;
        let likes = self.likes.read().map_err(handle_poison)?;
        Ok(likes
            .get(&tweet_id)
            .map(|likers| likers.iter().any(|a| a == caller))
            .unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (TweetStore, LikeRegistry, AccountId, TweetId) {
        let bus = EventBus::new(16);
        let tweets = TweetStore::new(bus.clone());
        let registry = LikeRegistry::new(tweets.clone(), bus);
        let alice = AccountId::new("alice");
        let id = tweets.add_tweet(&alice, "hello", false).unwrap();
        (tweets, registry, alice, id)
    }

    #[test]
    fn test_double_toggle_restores_prior_state() {
        let (tweets, registry, alice, id) = setup();

        assert!(registry.toggle_like(&alice, id).unwrap());
        assert!(!registry.toggle_like(&alice, id).unwrap());

        assert_eq!(registry.likes(id).unwrap().len(), 0);
        assert_eq!(tweets.get(id).unwrap().like_count, 0);
    }

    #[test]
    fn test_triple_toggle_ends_liked() {
        let (tweets, registry, alice, id) = setup();

        assert!(registry.toggle_like(&alice, id).unwrap());
        assert!(!registry.toggle_like(&alice, id).unwrap());
        assert!(registry.toggle_like(&alice, id).unwrap());

        assert_eq!(registry.likes(id).unwrap(), vec![alice]);
        assert_eq!(tweets.get(id).unwrap().like_count, 1);
    }

    #[test]
    fn test_each_liker_counted_once() {
        let (tweets, registry, alice, id) = setup();
        let bob = AccountId::new("bob");

        registry.toggle_like(&alice, id).unwrap();
        registry.toggle_like(&bob, id).unwrap();
        registry.toggle_like(&alice, id).unwrap(); // alice un-likes

        assert_eq!(registry.likes(id).unwrap(), vec![bob]);
        assert_eq!(tweets.get(id).unwrap().like_count, 1);
    }

    #[test]
    fn test_unknown_tweet_is_not_found() {
        let (_tweets, registry, alice, _id) = setup();
        assert!(matches!(
            registry.toggle_like(&alice, TweetId(99)),
            Err(FeedError::NotFound(_))
        ));
        assert!(matches!(
            registry.likes(TweetId(99)),
            Err(FeedError::NotFound(_))
        ));
    }
}
