//! Application Error - Unified error type for the application
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.

use std::borrow::Cow;

use super::kind::ErrorKind;

/// 統一エラー型
///
/// Service errors (`AuthError`) are converted into this just before
/// rendering, after the service error itself has been logged. Only
/// client-safe text goes into `detail`.
///
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::BadRequest, "Invalid state parameter");
/// assert_eq!(err.status_code(), 400);
/// assert_eq!(err.to_string(), "Bad Request: Invalid state parameter");
/// ```
#[derive(Debug, thiserror::Error)]
#[error("{kind}: {detail}")]
pub struct AppError {
    kind: ErrorKind,
    detail: Cow<'static, str>,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(kind: ErrorKind, detail: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn message(&self) -> &str {
        &self.detail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let err = AppError::new(ErrorKind::Unauthorized, "Invalid session");
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert_eq!(err.status_code(), 401);
        assert_eq!(err.message(), "Invalid session");
    }

    #[test]
    fn test_display() {
        let err = AppError::new(ErrorKind::ServiceUnavailable, "Session storage error");
        assert_eq!(err.to_string(), "Service Unavailable: Session storage error");
    }
}
