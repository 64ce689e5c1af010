//! Cookie Management Infrastructure
//!
//! Common cookie settings shared by the session cookie and the short-lived
//! OAuth2 state cookie.

use axum_extra::extract::cookie::Cookie;
use time::Duration;

pub use axum_extra::extract::cookie::SameSite;

/// Cookie configuration
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
    pub domain: Option<String>,
    pub max_age_secs: Option<i64>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "session_id".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
            domain: None,
            max_age_secs: None,
        }
    }
}

impl CookieConfig {
    /// Build a cookie carrying `value`
    pub fn build(&self, value: impl Into<String>) -> Cookie<'static> {
        let mut builder = Cookie::build((self.name.clone(), value.into()))
            .http_only(self.http_only)
            .secure(self.secure)
            .same_site(self.same_site)
            .path(self.path.clone());

        if let Some(domain) = &self.domain {
            builder = builder.domain(domain.clone());
        }
        if let Some(max_age) = self.max_age_secs {
            builder = builder.max_age(Duration::seconds(max_age));
        }

        builder.build()
    }

    /// Build an expired cookie that makes the browser drop this one
    ///
    /// Path and domain must match the original or the browser keeps it.
    pub fn removal(&self) -> Cookie<'static> {
        let mut builder = Cookie::build((self.name.clone(), ""))
            .http_only(self.http_only)
            .path(self.path.clone())
            .max_age(Duration::ZERO);

        if let Some(domain) = &self.domain {
            builder = builder.domain(domain.clone());
        }

        builder.build()
    }
}
