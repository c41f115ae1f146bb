//! Profile model
//!
//! One profile per account, keyed by identity in the store. Lookups for an
//! account that never uploaded a profile return the zero-value record, so
//! profile reads never fail.

use serde::{Deserialize, Serialize};

/// Per-account profile record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display handle
    pub username: String,

    /// Full name
    pub name: String,

    /// Free-form biography
    pub bio: String,
}

impl Profile {
    /// Create a profile from its three fields
    pub fn new(username: String, name: String, bio: String) -> Self {
        Profile {
            username,
            name,
            bio,
        }
    }
}
