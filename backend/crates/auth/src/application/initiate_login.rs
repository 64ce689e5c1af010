//! Initiate Login Use Case
//!
//! Produces the provider authorization URL and the CSRF state bound to it.

use std::sync::Arc;

use crate::domain::repository::IdentityProvider;
use crate::domain::value_object::csrf_state::CsrfState;

/// Where to send the browser, and the state to remember in a cookie
#[derive(Debug)]
pub struct LoginRedirect {
    pub url: String,
    pub state: CsrfState,
}

/// Initiate login use case
pub struct InitiateLoginUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
}

impl<P> InitiateLoginUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// No side effects besides generating randomness
    pub fn execute(&self) -> LoginRedirect {
        let state = CsrfState::generate();
        let url = self.provider.authorization_url(&state);

        tracing::debug!(provider = self.provider.name(), "Login initiated");

        LoginRedirect { url, state }
    }
}
