/*
    Metrics - operation counters for the feed stores

    Counters cover successful mutations and rejected operations. Export
    backends are wired by the embedding application, not by this crate.
*/

use metrics::{counter, describe_counter};

/// Initialize metric descriptions (call once at startup)
pub fn init_metrics() {
    describe_counter!("chirp_tweets_added_total", "Total number of tweets created");
    describe_counter!(
        "chirp_tweet_delete_flags_total",
        "Total number of tweet soft-delete flag flips"
    );
    describe_counter!("chirp_likes_toggled_total", "Total number of like toggles");
    describe_counter!("chirp_comments_added_total", "Total number of comments created");
    describe_counter!("chirp_comments_deleted_total", "Total number of comments removed");
    describe_counter!("chirp_profiles_upserted_total", "Total number of profile upserts");
    describe_counter!(
        "chirp_operations_rejected_total",
        "Total number of rejected operations, labeled by reason (not_found, unauthorized)"
    );
}

pub(crate) fn record_tweet_added() {
    counter!("chirp_tweets_added_total").increment(1);
}

pub(crate) fn record_tweet_delete_flag() {
    counter!("chirp_tweet_delete_flags_total").increment(1);
}

pub(crate) fn record_like_toggled() {
    counter!("chirp_likes_toggled_total").increment(1);
}

pub(crate) fn record_comment_added() {
    counter!("chirp_comments_added_total").increment(1);
}

pub(crate) fn record_comment_deleted() {
    counter!("chirp_comments_deleted_total").increment(1);
}

pub(crate) fn record_profile_upserted() {
    counter!("chirp_profiles_upserted_total").increment(1);
}

pub(crate) fn record_rejected(reason: &'static str) {
    counter!("chirp_operations_rejected_total", "reason" => reason).increment(1);
}
