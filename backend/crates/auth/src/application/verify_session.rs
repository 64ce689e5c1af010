//! Verify Session Use Case
//!
//! Answers "is this session id live, and whose is it?".

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::{AuthConfig, ExpiryPolicy};
use crate::domain::entity::session_record::SessionRecord;
use crate::domain::repository::SessionStore;
use crate::domain::value_object::{session_id::SessionId, user_identity::UserIdentity};
use crate::error::AuthResult;

/// Verification result
///
/// `Invalid` is an ordinary outcome; only store failures are errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    Valid(UserIdentity),
    Invalid,
}

/// Verify session use case
pub struct VerifySessionUseCase<S>
where
    S: SessionStore,
{
    store: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> VerifySessionUseCase<S>
where
    S: SessionStore,
{
    pub fn new(store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self { store, config }
    }

    pub async fn execute(&self, raw_session_id: &str) -> AuthResult<VerifyOutcome> {
        let Some(session_id) = SessionId::parse(raw_session_id) else {
            tracing::debug!("Malformed session id");
            return Ok(VerifyOutcome::Invalid);
        };

        let key = session_id.store_key();
        let Some(raw) = self.store.get(&key).await? else {
            tracing::debug!(session = %session_id.redacted(), "Session not found");
            return Ok(VerifyOutcome::Invalid);
        };

        let mut record = match SessionRecord::from_json(&raw) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(session = %session_id.redacted(), error = %e, "Undecodable session record");
                return Ok(VerifyOutcome::Invalid);
            }
        };

        let now = Utc::now();
        if record.session_id != session_id || record.is_expired_at(now) {
            tracing::debug!(session = %session_id.redacted(), "Session expired");
            return Ok(VerifyOutcome::Invalid);
        }

        if self.config.expiry_policy == ExpiryPolicy::Sliding {
            record.slide(now, self.config.session_ttl_chrono());
            // A failed refresh leaves the old expiry in place; the session
            // itself is still valid. A missing key means a logout landed
            // between the read and the write, and it must not be revived.
            match record.to_json() {
                Ok(payload) => match self
                    .store
                    .refresh(&key, &payload, self.config.session_ttl_secs())
                    .await
                {
                    Ok(true) => {}
                    Ok(false) => {
                        tracing::debug!(session = %session_id.redacted(), "Session removed during verification");
                        return Ok(VerifyOutcome::Invalid);
                    }
                    Err(e) => {
                        tracing::warn!(session = %session_id.redacted(), error = %e, "Failed to slide session expiry");
                    }
                },
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to encode refreshed session");
                }
            }
        }

        Ok(VerifyOutcome::Valid(record.user))
    }
}
