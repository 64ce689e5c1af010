//! Application Configuration
//!
//! Configuration for the Frontend application layer.

use std::time::Duration;

use platform::config::{ConfigError, EnvSource, Settings};
use platform::cookie::{CookieConfig, SameSite};

/// Frontend application configuration
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Server-to-server base URL of the Auth Service
    pub auth_service_url: String,
    /// Browser-facing base URL of the Auth Service (login link)
    pub auth_public_url: String,
    /// Must match the Auth Service's cookie name
    pub session_cookie_name: String,
    pub cookie_secure: bool,
    pub cookie_domain: Option<String>,
    /// Bound for every call to the Auth Service
    pub auth_timeout: Duration,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            auth_service_url: "http://localhost:8000".to_string(),
            auth_public_url: "http://localhost:8000".to_string(),
            session_cookie_name: "session_id".to_string(),
            cookie_secure: false,
            cookie_domain: None,
            auth_timeout: Duration::from_secs(3),
        }
    }
}

impl FrontendConfig {
    /// Load from `AUTH_*`, `SESSION_COOKIE_NAME` and `COOKIE_*`
    pub fn from_source<S: EnvSource + ?Sized>(settings: &Settings<'_, S>) -> Result<Self, ConfigError> {
        let auth_service_url = trim_slash(settings.required("AUTH_SERVICE_URL")?);
        let auth_public_url = settings
            .optional("AUTH_PUBLIC_URL")
            .map(trim_slash)
            .unwrap_or_else(|| auth_service_url.clone());

        Ok(Self {
            auth_service_url,
            auth_public_url,
            session_cookie_name: settings.string_or("SESSION_COOKIE_NAME", "session_id"),
            cookie_secure: settings.flag_or("COOKIE_SECURE", false)?,
            cookie_domain: settings.optional("COOKIE_DOMAIN"),
            auth_timeout: Duration::from_secs(settings.parse_or("AUTH_TIMEOUT_SECONDS", 3)?),
        })
    }

    /// Where the login page sends the browser
    pub fn login_url(&self) -> String {
        format!("{}/login/google", self.auth_public_url)
    }

    /// Session cookie as issued by the Auth Service; the frontend only
    /// ever removes it
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
            domain: self.cookie_domain.clone(),
            max_age_secs: None,
        }
    }
}

fn trim_slash(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
