//! Session Record Entity
//!
//! The only persistent entity. Stored as JSON under
//! [`SessionId::store_key`] with a store-side TTL equal to the session TTL.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{session_id::SessionId, user_identity::UserIdentity};

/// Session record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_id: SessionId,
    pub user: UserIdentity,
    /// Identity provider that vouched for `user`
    pub source: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// Kept only when configured; never leaves the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_token: Option<String>,
}

impl SessionRecord {
    /// Create a new record with a fresh id
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(
        user: UserIdentity,
        source: impl Into<String>,
        ttl: Duration,
        provider_token: Option<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            session_id: SessionId::generate(),
            user,
            source: source.into(),
            created_at: now,
            expires_at: now + ttl,
            provider_token,
        }
    }

    /// The store evicts on TTL; this guards against clock skew between the
    /// store and this process and against stores without native expiry.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Restart the expiry window (sliding expiration only)
    pub fn slide(&mut self, now: DateTime<Utc>, ttl: Duration) {
        self.expires_at = now + ttl;
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}
