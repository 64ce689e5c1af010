//! Repository Traits
//!
//! Interfaces for the shared session store and the identity provider.
//! Implementations live in the infrastructure layer.

use crate::domain::value_object::{csrf_state::CsrfState, user_identity::UserIdentity};
use crate::error::AuthResult;

/// Key-value cache with per-key expiry
///
/// This is the entire contract the session protocol needs. Any cache that
/// evicts a key after its TTL satisfies it.
#[trait_variant::make(SessionStore: Send)]
pub trait LocalSessionStore {
    /// Create or replace `key`; it must be gone after `ttl_seconds`
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> AuthResult<()>;

    /// Read `key`, `None` when absent or expired
    async fn get(&self, key: &str) -> AuthResult<Option<String>>;

    /// Replace `key` and restart its TTL only if it still exists
    ///
    /// Returns `false` when the key was absent, in which case nothing is
    /// written. A concurrent `delete` therefore always wins.
    async fn refresh(&self, key: &str, value: &str, ttl_seconds: u64) -> AuthResult<bool>;

    /// Remove `key`; removing an absent key is not an error
    async fn delete(&self, key: &str) -> AuthResult<()>;
}

/// Tokens returned by the provider's token endpoint
#[derive(Clone)]
pub struct ProviderTokens {
    pub access_token: String,
    pub expires_in: Option<u64>,
}

impl std::fmt::Debug for ProviderTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderTokens")
            .field("access_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// OAuth2 identity provider (authorization-code flow)
#[trait_variant::make(IdentityProvider: Send)]
pub trait LocalIdentityProvider {
    /// Tag stored in the session record (`"google"`)
    fn name(&self) -> &'static str;

    /// Authorization URL the browser is sent to
    fn authorization_url(&self, state: &CsrfState) -> String;

    /// Exchange a single-use authorization code for tokens
    async fn exchange_code(&self, code: &str) -> AuthResult<ProviderTokens>;

    /// Fetch the user profile with an access token
    async fn fetch_profile(&self, access_token: &str) -> AuthResult<UserIdentity>;
}
