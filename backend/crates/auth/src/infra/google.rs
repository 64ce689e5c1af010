//! Google OAuth2 Provider
//!
//! Authorization-code flow against Google's authorize / token / userinfo
//! endpoints. Endpoint URLs are configurable so tests can point them at a
//! mock server.

use std::time::Duration;

use platform::config::{ConfigError, EnvSource, Settings};
use serde::Deserialize;
use url::Url;

use crate::domain::repository::{IdentityProvider, ProviderTokens};
use crate::domain::value_object::{csrf_state::CsrfState, user_identity::UserIdentity};
use crate::error::{AuthError, AuthResult};

const DEFAULT_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const DEFAULT_REDIRECT_URI: &str = "http://localhost:8000/auth/google";
const SCOPES: &str = "openid profile email";
/// Bytes of a provider error body kept in the failure detail
const ERROR_BODY_LIMIT: usize = 512;

/// Google OAuth2 client configuration
#[derive(Clone)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub auth_url: Url,
    pub token_url: Url,
    pub userinfo_url: Url,
    pub redirect_uri: Url,
    /// Bound for each call to the token and userinfo endpoints
    pub timeout: Duration,
}

impl std::fmt::Debug for GoogleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("auth_url", &self.auth_url.as_str())
            .field("token_url", &self.token_url.as_str())
            .field("userinfo_url", &self.userinfo_url.as_str())
            .field("redirect_uri", &self.redirect_uri.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn parse_url(name: &str, raw: String) -> Result<Url, ConfigError> {
    Url::parse(&raw).map_err(|e| ConfigError::Invalid {
        name: name.to_string(),
        value: raw,
        reason: e.to_string(),
    })
}

impl GoogleConfig {
    /// Load from `GOOGLE_*` and `PROVIDER_TIMEOUT_SECONDS`
    pub fn from_source<S: EnvSource + ?Sized>(settings: &Settings<'_, S>) -> Result<Self, ConfigError> {
        Ok(Self {
            client_id: settings.required("GOOGLE_OAUTH_CLIENT_ID")?,
            client_secret: settings.required("GOOGLE_OAUTH_CLIENT_SECRET")?,
            auth_url: parse_url(
                "GOOGLE_OAUTH_AUTH_URL",
                settings.string_or("GOOGLE_OAUTH_AUTH_URL", DEFAULT_AUTH_URL),
            )?,
            token_url: parse_url(
                "GOOGLE_OAUTH_TOKEN_URL",
                settings.required("GOOGLE_OAUTH_TOKEN_URL")?,
            )?,
            userinfo_url: parse_url(
                "GOOGLE_OAUTH_USERINFO_URL",
                settings.required("GOOGLE_OAUTH_USERINFO_URL")?,
            )?,
            redirect_uri: parse_url(
                "GOOGLE_REDIRECT_URI",
                settings.string_or("GOOGLE_REDIRECT_URI", DEFAULT_REDIRECT_URI),
            )?,
            timeout: Duration::from_secs(settings.parse_or("PROVIDER_TIMEOUT_SECONDS", 5)?),
        })
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Google returns `sub` from the OIDC endpoint and `id` from the v2 one
#[derive(Deserialize)]
struct UserInfoResponse {
    #[serde(default)]
    sub: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

/// Google identity provider
#[derive(Clone)]
pub struct GoogleProvider {
    config: GoogleConfig,
    http: reqwest::Client,
}

impl GoogleProvider {
    pub fn new(config: GoogleConfig) -> AuthResult<Self> {
        let http = platform::http::bounded_client(config.timeout)
            .map_err(|e| AuthError::Internal(format!("http client: {e}")))?;
        Ok(Self { config, http })
    }

    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, String> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let body = read_prefix(response, ERROR_BODY_LIMIT).await;
        Err(format!("status {status}: {body}"))
    }
}

/// Read at most `limit` bytes of the body, cut back to a char boundary
async fn read_prefix(mut response: reqwest::Response, limit: usize) -> String {
    let mut buf = Vec::with_capacity(limit.min(1024));
    while buf.len() < limit {
        match response.chunk().await {
            Ok(Some(chunk)) => buf.extend_from_slice(&chunk),
            _ => break,
        }
    }
    let truncated = buf.len() > limit;
    buf.truncate(limit);

    let text = String::from_utf8_lossy(&buf);
    let mut text = text.trim_end_matches('\u{FFFD}').to_string();
    if truncated {
        text.push_str("...");
    }
    text
}

impl IdentityProvider for GoogleProvider {
    fn name(&self) -> &'static str {
        "google"
    }

    fn authorization_url(&self, state: &CsrfState) -> String {
        let mut url = self.config.auth_url.clone();
        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.config.client_id)
            .append_pair("redirect_uri", self.config.redirect_uri.as_str())
            .append_pair("scope", SCOPES)
            .append_pair("state", state.as_str())
            .append_pair("access_type", "online")
            .append_pair("prompt", "select_account");
        url.into()
    }

    async fn exchange_code(&self, code: &str) -> AuthResult<ProviderTokens> {
        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
        ];

        let response = self
            .http
            .post(self.config.token_url.clone())
            .form(&params)
            .send()
            .await
            .map_err(|e| AuthError::exchange(e.to_string(), e.is_timeout()))?;

        let response = Self::ensure_success(response)
            .await
            .map_err(|detail| AuthError::exchange(detail, false))?;

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::exchange(format!("malformed token response: {e}"), e.is_timeout()))?;

        let access_token = body
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AuthError::exchange("token response without access_token", false))?;

        Ok(ProviderTokens {
            access_token,
            expires_in: body.expires_in,
        })
    }

    async fn fetch_profile(&self, access_token: &str) -> AuthResult<UserIdentity> {
        let response = self
            .http
            .get(self.config.userinfo_url.clone())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::profile(e.to_string(), e.is_timeout()))?;

        let response = Self::ensure_success(response)
            .await
            .map_err(|detail| AuthError::profile(detail, false))?;

        let body: UserInfoResponse = response
            .json()
            .await
            .map_err(|e| AuthError::profile(format!("malformed userinfo: {e}"), e.is_timeout()))?;

        let id = body
            .sub
            .or(body.id)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AuthError::profile("userinfo without subject id", false))?;

        Ok(UserIdentity {
            id,
            email: body.email,
            name: body.name,
        })
    }
}
