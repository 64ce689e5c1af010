//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Provider and store details are logged here and never reach the response
//! body; clients only see the generic message of the mapped [`ErrorKind`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// CSRF state missing or not matching the state cookie
    #[error("Invalid state parameter")]
    InvalidState,

    /// Required request parameter absent
    #[error("Missing {0}")]
    MissingParameter(&'static str),

    /// Provider redirected back with `?error=`
    #[error("Login denied by provider: {0}")]
    ProviderDenied(String),

    /// Authorization code exchange failed
    #[error("Token exchange failed: {detail}")]
    ProviderExchange { detail: String, timed_out: bool },

    /// Userinfo fetch failed
    #[error("Profile fetch failed: {detail}")]
    ProviderProfile { detail: String, timed_out: bool },

    /// Session not found or expired
    #[error("Invalid session")]
    SessionInvalid,

    /// Session store unreachable or timed out
    #[error("Session store unavailable: {0}")]
    StoreUnavailable(String),

    /// Session record could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn exchange(detail: impl Into<String>, timed_out: bool) -> Self {
        AuthError::ProviderExchange {
            detail: detail.into(),
            timed_out,
        }
    }

    pub fn profile(detail: impl Into<String>, timed_out: bool) -> Self {
        AuthError::ProviderProfile {
            detail: detail.into(),
            timed_out,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidState
            | AuthError::MissingParameter(_)
            | AuthError::ProviderDenied(_) => ErrorKind::BadRequest,
            AuthError::ProviderExchange { timed_out, .. }
            | AuthError::ProviderProfile { timed_out, .. } => {
                if *timed_out {
                    ErrorKind::GatewayTimeout
                } else {
                    ErrorKind::BadGateway
                }
            }
            AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::StoreUnavailable(_) => ErrorKind::ServiceUnavailable,
            AuthError::Serialization(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Message safe to show to the client
    pub fn public_message(&self) -> String {
        match self {
            AuthError::InvalidState => "Invalid state parameter".to_string(),
            AuthError::MissingParameter(name) => format!("Missing {name}"),
            AuthError::ProviderDenied(_) => "Login was cancelled".to_string(),
            AuthError::ProviderExchange { timed_out: true, .. }
            | AuthError::ProviderProfile { timed_out: true, .. } => "Login timed out".to_string(),
            AuthError::ProviderExchange { .. } | AuthError::ProviderProfile { .. } => {
                "Login failed".to_string()
            }
            AuthError::SessionInvalid => "Invalid session".to_string(),
            AuthError::StoreUnavailable(_) => "Session storage error".to_string(),
            AuthError::Serialization(_) | AuthError::Internal(_) => "Internal error".to_string(),
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.public_message())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::ProviderExchange { detail, timed_out } => {
                tracing::error!(detail = %detail, timed_out, "Provider token exchange failed");
            }
            AuthError::ProviderProfile { detail, timed_out } => {
                tracing::error!(detail = %detail, timed_out, "Provider userinfo fetch failed");
            }
            AuthError::StoreUnavailable(detail) => {
                tracing::error!(detail = %detail, "Session store unavailable");
            }
            AuthError::Serialization(e) => {
                tracing::error!(error = %e, "Session record serialization failed");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidState => {
                tracing::warn!("OAuth2 state mismatch");
            }
            AuthError::ProviderDenied(reason) => {
                tracing::warn!(reason = %reason, "Provider denied login");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<redis::RedisError> for AuthError {
    fn from(err: redis::RedisError) -> Self {
        AuthError::StoreUnavailable(err.to_string())
    }
}
