//! Comment store
//!
//! Holds the ordered live comments per tweet plus a separate monotonic
//! sequence counter that names comment ids. The counter is independent of
//! the live list length: deleting a comment never changes other comments'
//! ids and never frees an id for reuse. Sequence assignment and list append
//! happen in one write-lock section so concurrent adds cannot race on the
//! counter.

use crate::core_feed::events::{EventBus, FeedEvent};
use crate::core_feed::metrics;
use crate::core_feed::model::{AccountId, Comment, CommentId, TweetId};
use crate::core_feed::store::auth;
use crate::core_feed::store::errors::{handle_poison, FeedError, FeedResult};
use crate::core_feed::store::tweet_store::TweetStore;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Live comments and the id sequence for one tweet
#[derive(Debug, Default)]
struct CommentThread {
    live: Vec<Comment>,
    next_seq: u64,
}

/// Store of per-tweet comment threads
#[derive(Clone)]
pub struct CommentStore {
    threads: Arc<RwLock<HashMap<TweetId, CommentThread>>>,
    tweets: TweetStore,
    bus: EventBus,
}

impl CommentStore {
    /// Create a store over the given tweet store
    pub fn new(tweets: TweetStore, bus: EventBus) -> Self {
        CommentStore {
            threads: Arc::new(RwLock::new(HashMap::new())),
            tweets,
            bus,
        }
    }

    /// Append a comment to a tweet and return its generated id.
    ///
    /// The id is `comment-{tweetId}-{seq}` where `seq` is the tweet's
    /// monotonic comment counter, not the live list length.
    pub fn add_comment(
        &self,
        caller: &AccountId,
        tweet_id: TweetId,
        text: impl Into<String>,
    ) -> FeedResult<CommentId> {
        self.tweets.ensure_exists(tweet_id)?;

        let mut threads = self.threads.write().map_err(handle_poison)?;
        let thread = threads.entry(tweet_id).or_default();
        let comment_id = CommentId::new(tweet_id, thread.next_seq);
        thread.next_seq += 1;
        thread.live.push(Comment::new(
            comment_id.clone(),
            tweet_id,
            caller.clone(),
            text.into(),
        ));
        self.tweets.set_comment_count(tweet_id, thread.live.len() as u64)?;

        self.bus.emit(FeedEvent::CommentTweet {
            tweet_id,
            comment_id: comment_id.clone(),
        });
        metrics::record_comment_added();
        debug!(caller = %caller, tweet_id = %tweet_id, comment_id = %comment_id, "comment added");
        Ok(comment_id)
    }

    /// Remove a comment from a tweet's live list.
    ///
    /// Only the comment's author may delete it; a non-author caller gets
    /// `Unauthorized` and the operation has no effect. The removed id is
    /// never reassigned to a future comment.
    pub fn delete_comment(
        &self,
        caller: &AccountId,
        tweet_id: TweetId,
        comment_id: &CommentId,
    ) -> FeedResult<()> {
        self.tweets.ensure_exists(tweet_id)?;

        let mut threads = self.threads.write().map_err(handle_poison)?;
        let thread = threads.get_mut(&tweet_id).ok_or_else(|| {
            metrics::record_rejected("not_found");
            FeedError::NotFound(format!("comment {} on tweet {}", comment_id, tweet_id))
        })?;
        let pos = thread
            .live
            .iter()
            .position(|c| &c.id == comment_id)
            .ok_or_else(|| {
                metrics::record_rejected("not_found");
                FeedError::NotFound(format!("comment {} on tweet {}", comment_id, tweet_id))
            })?;

        if !auth::is_author(&thread.live[pos].author, caller) {
            metrics::record_rejected("unauthorized");
            return Err(FeedError::Unauthorized(format!(
                "caller {} is not the author of {}",
                caller, comment_id
            )));
        }

        thread.live.remove(pos);
        self.tweets.set_comment_count(tweet_id, thread.live.len() as u64)?;

        self.bus.emit(FeedEvent::DeleteComment {
            comment_id: comment_id.clone(),
            removed: true,
        });
        metrics::record_comment_deleted();
        debug!(caller = %caller, tweet_id = %tweet_id, comment_id = %comment_id, "comment deleted");
        Ok(())
    }

    /// Live comments for a tweet in creation order
    pub fn comments(&self, tweet_id: TweetId) -> FeedResult<Vec<Comment>> {
        self.tweets.ensure_exists(tweet_id)?;
        let threads = self.threads.read().map_err(handle_poison)?;
        Ok(threads
            .get(&tweet_id)
            .map(|t| t.live.clone())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (TweetStore, CommentStore, AccountId, TweetId) {
        let bus = EventBus::new(16);
        let tweets = TweetStore::new(bus.clone());
        let store = CommentStore::new(tweets.clone(), bus);
        let alice = AccountId::new("alice");
        let id = tweets.add_tweet(&alice, "hello", false).unwrap();
        (tweets, store, alice, id)
    }

    #[test]
    fn test_first_comment_id_is_seq_zero() {
        let (_tweets, store, alice, id) = setup();
        let comment_id = store.add_comment(&alice, id, "first").unwrap();
        assert_eq!(comment_id.as_str(), "comment-0-0");
    }

    #[test]
    fn test_sequence_is_per_tweet() {
        let (tweets, store, alice, first) = setup();
        let second = tweets.add_tweet(&alice, "another", false).unwrap();

        store.add_comment(&alice, first, "a").unwrap();
        store.add_comment(&alice, first, "b").unwrap();
        let on_second = store.add_comment(&alice, second, "c").unwrap();

        // Comments elsewhere do not advance this tweet's sequence
        assert_eq!(on_second.as_str(), "comment-1-0");
    }

    #[test]
    fn test_deleted_ids_are_never_reused() {
        let (_tweets, store, alice, id) = setup();
        let first = store.add_comment(&alice, id, "a").unwrap();
        store.delete_comment(&alice, id, &first).unwrap();

        let next = store.add_comment(&alice, id, "b").unwrap();
        assert_eq!(next.as_str(), "comment-0-1");

        // The old id stays gone
        assert!(matches!(
            store.delete_comment(&alice, id, &first),
            Err(FeedError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_keeps_other_ids_stable() {
        let (tweets, store, alice, id) = setup();
        let a = store.add_comment(&alice, id, "a").unwrap();
        let b = store.add_comment(&alice, id, "b").unwrap();
        let c = store.add_comment(&alice, id, "c").unwrap();

        store.delete_comment(&alice, id, &b).unwrap();

        let live = store.comments(id).unwrap();
        assert_eq!(
            live.iter().map(|cm| cm.id.clone()).collect::<Vec<_>>(),
            vec![a, c]
        );
        assert_eq!(tweets.get(id).unwrap().comment_count, 2);
    }

    #[test]
    fn test_non_author_delete_is_unauthorized_and_inert() {
        let (tweets, store, alice, id) = setup();
        let bob = AccountId::new("bob");
        let comment_id = store.add_comment(&bob, id, "mine").unwrap();

        let err = store.delete_comment(&alice, id, &comment_id).unwrap_err();
        assert!(matches!(err, FeedError::Unauthorized(_)));

        assert_eq!(store.comments(id).unwrap().len(), 1);
        assert_eq!(tweets.get(id).unwrap().comment_count, 1);
    }

    #[test]
    fn test_unknown_tweet_is_not_found() {
        let (_tweets, store, alice, _id) = setup();
        assert!(matches!(
            store.add_comment(&alice, TweetId(42), "x"),
            Err(FeedError::NotFound(_))
        ));
        assert!(matches!(
            store.comments(TweetId(42)),
            Err(FeedError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_on_uncommented_tweet_is_not_found() {
        let (_tweets, store, alice, id) = setup();
        let ghost = CommentId::from("comment-0-0");
        assert!(matches!(
            store.delete_comment(&alice, id, &ghost),
            Err(FeedError::NotFound(_))
        ));
    }
}
