//! Logout Use Case
//!
//! Revokes a session. Idempotent.

use std::sync::Arc;

use crate::domain::repository::SessionStore;
use crate::domain::value_object::session_id::SessionId;
use crate::error::AuthResult;

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: SessionStore,
{
    store: Arc<S>,
}

impl<S> LogoutUseCase<S>
where
    S: SessionStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Delete the record; unknown or malformed ids are acknowledged too
    pub async fn execute(&self, raw_session_id: &str) -> AuthResult<()> {
        let Some(session_id) = SessionId::parse(raw_session_id) else {
            return Ok(());
        };

        self.store.delete(&session_id.store_key()).await?;

        tracing::info!(session = %session_id.redacted(), "Session revoked");
        Ok(())
    }
}
