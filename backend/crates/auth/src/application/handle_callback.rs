//! Handle Callback Use Case
//!
//! Completes the authorization-code flow and mints a session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::session_record::SessionRecord;
use crate::domain::repository::{IdentityProvider, SessionStore};
use crate::domain::value_object::{csrf_state::CsrfState, session_id::SessionId};
use crate::error::{AuthError, AuthResult};

/// Callback input
pub struct CallbackInput<'a> {
    pub code: &'a str,
    pub returned_state: &'a str,
    /// State from the cookie set by `/login/google`
    pub expected_state: Option<CsrfState>,
}

/// Handle callback use case
pub struct HandleCallbackUseCase<P, S>
where
    P: IdentityProvider,
    S: SessionStore,
{
    provider: Arc<P>,
    store: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<P, S> HandleCallbackUseCase<P, S>
where
    P: IdentityProvider,
    S: SessionStore,
{
    pub fn new(provider: Arc<P>, store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            provider,
            store,
            config,
        }
    }

    /// Exchange the code, fetch the profile, persist the session
    ///
    /// The store write is the last step: any earlier failure leaves the
    /// store untouched.
    pub async fn execute(&self, input: CallbackInput<'_>) -> AuthResult<SessionId> {
        let expected = input.expected_state.ok_or(AuthError::InvalidState)?;
        if !expected.matches(input.returned_state) {
            return Err(AuthError::InvalidState);
        }

        if input.code.is_empty() {
            return Err(AuthError::MissingParameter("code"));
        }

        let tokens = self.provider.exchange_code(input.code).await?;
        let user = self.provider.fetch_profile(&tokens.access_token).await?;

        let provider_token = self
            .config
            .retain_provider_token
            .then(|| tokens.access_token.clone());

        let record = SessionRecord::new(
            user,
            self.provider.name(),
            self.config.session_ttl_chrono(),
            provider_token,
        );

        let payload = record.to_json()?;
        self.store
            .put(
                &record.session_id.store_key(),
                &payload,
                self.config.session_ttl_secs(),
            )
            .await?;

        tracing::info!(
            session = %record.session_id.redacted(),
            user_id = %record.user.id,
            expires_at = %record.expires_at,
            "Session created"
        );

        Ok(record.session_id)
    }
}
