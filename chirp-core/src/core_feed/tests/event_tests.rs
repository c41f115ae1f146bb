/*
    Event tests - payloads and per-tweet ordering

    Every successful mutation publishes exactly one event; failed
    operations publish nothing. Events for the same tweet arrive in the
    order the mutations were serialized.
*/

use crate::core_feed::events::FeedEvent;
use crate::core_feed::model::{AccountId, TweetId};
use crate::core_feed::Feed;

#[tokio::test]
async fn test_add_tweet_event_carries_author_and_id() {
    let feed = Feed::default();
    let owner = AccountId::new("owner");
    let other = AccountId::new("addr1");

    for _ in 0..5 {
        feed.tweets.add_tweet(&other, "seed", false).unwrap();
    }
    for _ in 0..3 {
        feed.tweets.add_tweet(&owner, "seed", false).unwrap();
    }

    let mut rx = feed.subscribe();
    feed.tweets.add_tweet(&owner, "New Tweet", false).unwrap();

    assert_eq!(
        rx.recv().await.unwrap(),
        FeedEvent::AddTweet {
            author: owner,
            tweet_id: TweetId(8),
        }
    );
}

#[tokio::test]
async fn test_like_events_report_resulting_state() {
    let feed = Feed::default();
    let alice = AccountId::new("alice");
    let id = feed.tweets.add_tweet(&alice, "hello", false).unwrap();

    let mut rx = feed.subscribe();
    feed.likes.toggle_like(&alice, id).unwrap();
    feed.likes.toggle_like(&alice, id).unwrap();
    feed.likes.toggle_like(&alice, id).unwrap();

    for expected in [true, false, true] {
        assert_eq!(
            rx.recv().await.unwrap(),
            FeedEvent::LikeTweet {
                tweet_id: id,
                liked: expected,
            }
        );
    }
}

#[tokio::test]
async fn test_delete_tweet_event_carries_new_state() {
    let feed = Feed::default();
    let alice = AccountId::new("alice");
    let bob = AccountId::new("bob");
    let id = feed.tweets.add_tweet(&alice, "hello", false).unwrap();

    let mut rx = feed.subscribe();
    feed.tweets.delete_tweet(&bob, id, true).unwrap();

    assert_eq!(
        rx.recv().await.unwrap(),
        FeedEvent::DeleteTweet {
            tweet_id: id,
            deleted: true,
        }
    );
}

#[tokio::test]
async fn test_comment_lifecycle_events() {
    let feed = Feed::default();
    let alice = AccountId::new("alice");
    let id = feed.tweets.add_tweet(&alice, "hello", false).unwrap();

    let mut rx = feed.subscribe();
    let comment_id = feed.comments.add_comment(&alice, id, "This is a comment").unwrap();
    feed.comments.delete_comment(&alice, id, &comment_id).unwrap();

    assert_eq!(
        rx.recv().await.unwrap(),
        FeedEvent::CommentTweet {
            tweet_id: id,
            comment_id: comment_id.clone(),
        }
    );
    assert_eq!(
        rx.recv().await.unwrap(),
        FeedEvent::DeleteComment {
            comment_id,
            removed: true,
        }
    );
}

#[tokio::test]
async fn test_failed_operations_publish_nothing() {
    let feed = Feed::default();
    let alice = AccountId::new("alice");
    let bob = AccountId::new("bob");
    let id = feed.tweets.add_tweet(&alice, "hello", false).unwrap();
    let comment_id = feed.comments.add_comment(&alice, id, "mine").unwrap();

    let mut rx = feed.subscribe();
    assert!(feed.likes.toggle_like(&alice, TweetId(99)).is_err());
    assert!(feed.comments.delete_comment(&bob, id, &comment_id).is_err());

    // The next event is from the next successful mutation, nothing earlier
    feed.tweets.delete_tweet(&alice, id, true).unwrap();
    assert_eq!(
        rx.recv().await.unwrap(),
        FeedEvent::DeleteTweet {
            tweet_id: id,
            deleted: true,
        }
    );
}

#[tokio::test]
async fn test_same_tweet_events_preserve_mutation_order() {
    let feed = Feed::default();
    let alice = AccountId::new("alice");
    let id = feed.tweets.add_tweet(&alice, "hello", false).unwrap();

    let mut rx = feed.subscribe();
    feed.likes.toggle_like(&alice, id).unwrap();
    let comment_id = feed.comments.add_comment(&alice, id, "c").unwrap();
    feed.likes.toggle_like(&alice, id).unwrap();

    assert_eq!(
        rx.recv().await.unwrap(),
        FeedEvent::LikeTweet { tweet_id: id, liked: true }
    );
    assert_eq!(
        rx.recv().await.unwrap(),
        FeedEvent::CommentTweet { tweet_id: id, comment_id }
    );
    assert_eq!(
        rx.recv().await.unwrap(),
        FeedEvent::LikeTweet { tweet_id: id, liked: false }
    );
}
