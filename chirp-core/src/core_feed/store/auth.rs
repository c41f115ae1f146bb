//! Authorship check for delete operations
//!
//! Authorship is recorded at creation time, never changes, and is the sole
//! basis for delete authorization. The check is a pure predicate so stores
//! stay trivially testable.

use crate::core_feed::model::AccountId;

/// Returns true when the caller is the resource's author.
///
/// Currently only comment deletion consults this; tweet deletion is
/// authorization-open at this layer (see `TweetStore::delete_tweet`).
pub fn is_author(resource_author: &AccountId, caller: &AccountId) -> bool {
    resource_author == caller
}
