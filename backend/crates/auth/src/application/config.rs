//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::config::{ConfigError, EnvSource, Settings};
use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// What a successful verify does to the session expiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpiryPolicy {
    /// `expires_at` is fixed at creation
    #[default]
    Fixed,
    /// Every successful verify restarts the TTL window
    Sliding,
}

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session lifetime, also the store TTL (and cookie Max-Age when fixed)
    pub session_ttl: Duration,
    pub expiry_policy: ExpiryPolicy,
    /// Keep the provider access token in the session record
    pub retain_provider_token: bool,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    pub cookie_domain: Option<String>,
    /// CSRF state cookie name
    pub state_cookie_name: String,
    pub state_ttl: Duration,
    /// Where the browser lands after a successful login
    pub frontend_url: String,
}

/// Longest accepted session lifetime (one year)
pub const MAX_SESSION_TTL_SECS: u64 = 365 * 24 * 60 * 60;

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "session_id".to_string(),
            session_ttl: Duration::from_secs(3600), // 1 hour
            expiry_policy: ExpiryPolicy::Fixed,
            retain_provider_token: false,
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            cookie_domain: None,
            state_cookie_name: "oauth_state".to_string(),
            state_ttl: Duration::from_secs(5 * 60), // 5 minutes
            frontend_url: "http://localhost:5000".to_string(),
        }
    }
}

impl AuthConfig {
    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Default::default()
        }
    }

    /// Load from `SESSION_*`, `COOKIE_*` and `WEB_FRONTEND_URL`
    pub fn from_source<S: EnvSource + ?Sized>(settings: &Settings<'_, S>) -> Result<Self, ConfigError> {
        let ttl_secs: u64 = settings.parse_or("SESSION_EXPIRE_TIME_SECONDS", 3600)?;
        if !(1..=MAX_SESSION_TTL_SECS).contains(&ttl_secs) {
            return Err(ConfigError::Invalid {
                name: "SESSION_EXPIRE_TIME_SECONDS".to_string(),
                value: ttl_secs.to_string(),
                reason: format!("must be between 1 and {MAX_SESSION_TTL_SECS}"),
            });
        }

        let expiry_policy = if settings.flag_or("SESSION_SLIDING", false)? {
            ExpiryPolicy::Sliding
        } else {
            ExpiryPolicy::Fixed
        };

        Ok(Self {
            session_cookie_name: settings.string_or("SESSION_COOKIE_NAME", "session_id"),
            session_ttl: Duration::from_secs(ttl_secs),
            expiry_policy,
            retain_provider_token: settings.flag_or("SESSION_RETAIN_PROVIDER_TOKEN", false)?,
            cookie_secure: settings.flag_or("COOKIE_SECURE", false)?,
            cookie_domain: settings.optional("COOKIE_DOMAIN"),
            frontend_url: settings.required("WEB_FRONTEND_URL")?,
            ..Default::default()
        })
    }

    /// Session TTL in whole seconds (store TTL), clamped to `1..=MAX_SESSION_TTL_SECS`
    pub fn session_ttl_secs(&self) -> u64 {
        self.session_ttl.as_secs().clamp(1, MAX_SESSION_TTL_SECS)
    }

    /// Session TTL as a chrono duration (record timestamps)
    pub fn session_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.session_ttl_secs() as i64)
    }

    /// Session cookie
    ///
    /// Under a fixed policy Max-Age equals the session TTL. Under a sliding
    /// policy the cookie is a browser-session cookie, since nothing re-sends
    /// it when the store entry is extended.
    pub fn session_cookie(&self) -> CookieConfig {
        let max_age_secs = match self.expiry_policy {
            ExpiryPolicy::Fixed => Some(self.session_ttl_secs() as i64),
            ExpiryPolicy::Sliding => None,
        };

        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            domain: self.cookie_domain.clone(),
            max_age_secs,
        }
    }

    /// CSRF state cookie, scoped to the callback path
    pub fn state_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.state_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/auth".to_string(),
            domain: None,
            max_age_secs: Some(self.state_ttl.as_secs() as i64),
        }
    }
}
