//! Frontend Error Types
//!
//! Failures talking to the Auth Service. Route guards never surface these to
//! the browser; they log them and treat the visitor as logged out.

use thiserror::Error;

/// Frontend-specific result type alias
pub type FrontendResult<T> = Result<T, FrontendError>;

#[derive(Debug, Error)]
pub enum FrontendError {
    /// Connection refused, DNS failure and the like
    #[error("Auth service unavailable: {0}")]
    AuthUnavailable(String),

    #[error("Auth service timed out")]
    AuthTimeout,

    /// Anything other than 200 or 401 from `/verify`
    #[error("Auth service returned HTTP {0}")]
    UnexpectedStatus(u16),

    #[error("Invalid response from auth service: {0}")]
    Decode(String),
}

impl FrontendError {
    /// Classify a transport error
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FrontendError::AuthTimeout
        } else if err.is_decode() {
            FrontendError::Decode(err.to_string())
        } else {
            FrontendError::AuthUnavailable(err.to_string())
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            FrontendError::AuthUnavailable(detail) => {
                tracing::error!(detail = %detail, "Auth service network error");
            }
            FrontendError::AuthTimeout => {
                tracing::warn!("Auth service timed out");
            }
            FrontendError::UnexpectedStatus(status) => {
                tracing::warn!(status, "Auth service returned unexpected status");
            }
            FrontendError::Decode(detail) => {
                tracing::error!(detail = %detail, "Auth service JSON error");
            }
        }
    }
}
