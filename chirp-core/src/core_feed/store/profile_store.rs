//! Profile store
//!
//! One profile per account, keyed by the caller's identity. The upsert is
//! self-authorizing: a caller can only ever write the slot their own
//! identity keys. Reads never fail - unset identities get the zero-value
//! profile.

use crate::core_feed::metrics;
use crate::core_feed::model::{AccountId, Profile};
use crate::core_feed::store::errors::{handle_poison, FeedResult};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Store of per-account profile records
#[derive(Clone, Default)]
pub struct ProfileStore {
    profiles: Arc<RwLock<HashMap<AccountId, Profile>>>,
}

impl ProfileStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert the caller's profile, overwriting any previous record
    pub fn upload_profile(
        &self,
        caller: &AccountId,
        username: impl Into<String>,
        name: impl Into<String>,
        bio: impl Into<String>,
    ) -> FeedResult<()> {
        let profile = Profile::new(username.into(), name.into(), bio.into());
        let mut profiles = self.profiles.write().map_err(handle_poison)?;
        profiles.insert(caller.clone(), profile);

        metrics::record_profile_upserted();
        debug!(caller = %caller, "profile uploaded");
        Ok(())
    }

    /// The account's profile, or the all-empty record when unset
    pub fn user(&self, account: &AccountId) -> FeedResult<Profile> {
        let profiles = self.profiles.read().map_err(handle_poison)?;
        Ok(profiles.get(account).cloned().unwrap_or_default())
    }
}
