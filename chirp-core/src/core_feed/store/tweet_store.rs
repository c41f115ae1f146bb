//! Tweet store
//!
//! Owns the tweet records and the insertion sequence that assigns ids.
//! Ids equal the number of tweets that existed before the new one, so the
//! len-then-push pair must happen inside a single write-lock section to
//! keep ids unique and contiguous under concurrent callers.

use crate::core_feed::events::{EventBus, FeedEvent};
use crate::core_feed::metrics;
use crate::core_feed::model::{AccountId, Tweet, TweetId};
use crate::core_feed::store::errors::{handle_poison, FeedError, FeedResult};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Store of all tweets, keyed by sequential id
#[derive(Clone)]
pub struct TweetStore {
    tweets: Arc<RwLock<Vec<Tweet>>>,
    bus: EventBus,
}

impl TweetStore {
    /// Create an empty store publishing on the given bus
    pub fn new(bus: EventBus) -> Self {
        TweetStore {
            tweets: Arc::new(RwLock::new(Vec::new())),
            bus,
        }
    }

    /// Append a new tweet authored by the caller and return its id.
    ///
    /// The `deleted` flag is taken at creation for parity with the external
    /// operation surface; canonical callers pass `false`. Empty text is
    /// permitted.
    pub fn add_tweet(
        &self,
        caller: &AccountId,
        text: impl Into<String>,
        deleted: bool,
    ) -> FeedResult<TweetId> {
        let mut tweets = self.tweets.write().map_err(handle_poison)?;
        let id = TweetId(tweets.len() as u64);
        tweets.push(Tweet::new(id, caller.clone(), text.into(), deleted));

        // Emitted before the lock is released so events for the same tweet
        // observe the order in which mutations were serialized.
        self.bus.emit(FeedEvent::AddTweet {
            author: caller.clone(),
            tweet_id: id,
        });
        metrics::record_tweet_added();
        debug!(author = %caller, tweet_id = %id, "tweet added");
        Ok(id)
    }

    /// Set a tweet's soft-delete flag.
    ///
    /// The record is retained; only the flag flips. Authorship is not
    /// checked here: any caller may flip any tweet's flag, while comment
    /// deletion is author-gated. The asymmetry is kept as-is pending
    /// product review rather than silently unified.
    pub fn delete_tweet(
        &self,
        caller: &AccountId,
        tweet_id: TweetId,
        deleted: bool,
    ) -> FeedResult<()> {
        let mut tweets = self.tweets.write().map_err(handle_poison)?;
        let tweet = tweets.get_mut(tweet_id.as_index()).ok_or_else(|| {
            metrics::record_rejected("not_found");
            FeedError::NotFound(format!("tweet {}", tweet_id))
        })?;
        tweet.deleted = deleted;

        self.bus.emit(FeedEvent::DeleteTweet { tweet_id, deleted });
        metrics::record_tweet_delete_flag();
        debug!(caller = %caller, tweet_id = %tweet_id, deleted, "tweet delete flag set");
        Ok(())
    }

    /// All tweets in creation order, soft-deleted ones included
    pub fn all_tweets(&self) -> FeedResult<Vec<Tweet>> {
        let tweets = self.tweets.read().map_err(handle_poison)?;
        Ok(tweets.clone())
    }

    /// The given author's tweets, creation order preserved
    pub fn user_tweets(&self, author: &AccountId) -> FeedResult<Vec<Tweet>> {
        let tweets = self.tweets.read().map_err(handle_poison)?;
        Ok(tweets.iter().filter(|t| &t.author == author).cloned().collect())
    }

    /// Fetch a single tweet by id
    pub fn get(&self, tweet_id: TweetId) -> FeedResult<Tweet> {
        let tweets = self.tweets.read().map_err(handle_poison)?;
        tweets
            .get(tweet_id.as_index())
            .cloned()
            .ok_or_else(|| FeedError::NotFound(format!("tweet {}", tweet_id)))
    }

    /// Number of tweets ever created
    pub fn len(&self) -> FeedResult<u64> {
        let tweets = self.tweets.read().map_err(handle_poison)?;
        Ok(tweets.len() as u64)
    }

    /// Whether the store holds no tweets
    pub fn is_empty(&self) -> FeedResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Fail with NotFound unless the tweet id is in bounds.
    ///
    /// Tweets are never physically removed, so existence is stable once
    /// observed.
    pub(crate) fn ensure_exists(&self, tweet_id: TweetId) -> FeedResult<()> {
        let tweets = self.tweets.read().map_err(handle_poison)?;
        if tweet_id.as_index() < tweets.len() {
            Ok(())
        } else {
            metrics::record_rejected("not_found");
            Err(FeedError::NotFound(format!("tweet {}", tweet_id)))
        }
    }

    /// Write back the derived liker count maintained by the like registry
    pub(crate) fn set_like_count(&self, tweet_id: TweetId, count: u64) -> FeedResult<()> {
        let mut tweets = self.tweets.write().map_err(handle_poison)?;
        let tweet = tweets
            .get_mut(tweet_id.as_index())
            .ok_or_else(|| FeedError::NotFound(format!("tweet {}", tweet_id)))?;
        tweet.like_count = count;
        Ok(())
    }

    /// Write back the derived live-comment count maintained by the comment store
    pub(crate) fn set_comment_count(&self, tweet_id: TweetId, count: u64) -> FeedResult<()> {
        let mut tweets = self.tweets.write().map_err(handle_poison)?;
        let tweet = tweets
            .get_mut(tweet_id.as_index())
            .ok_or_else(|| FeedError::NotFound(format!("tweet {}", tweet_id)))?;
        tweet.comment_count = count;
        Ok(())
    }
}
