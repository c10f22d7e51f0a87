//! Common types

use serde::{Deserialize, Serialize};

/// Identity on whose behalf a mutation is performed.
///
/// Every mutating store operation takes an `Actor` so the audit trail
/// records who did what, instead of an ambient "current user".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub user_id: String,
    pub user_name: String,
}

impl Actor {
    pub fn new(user_id: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self { user_id: user_id.into(), user_name: user_name.into() }
    }

    pub fn system() -> Self {
        Self {
            user_id: super::constants::SYSTEM_USER_ID.to_string(),
            user_name: super::constants::SYSTEM_USER_NAME.to_string(),
        }
    }
}
