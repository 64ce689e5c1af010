//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to HTTP status codes.

/// エラー種別
///
/// Only the outcomes the session protocol can actually produce. Each kind has
/// one status code and one reason phrase.
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::GatewayTimeout.status_code(), 504);
/// assert_eq!(ErrorKind::GatewayTimeout.as_str(), "Gateway Timeout");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// CSRF state mismatch, missing parameter, provider denial
    BadRequest,
    /// No live session
    Unauthorized,
    InternalServerError,
    /// Identity provider or Auth Service answered with something unusable
    BadGateway,
    /// Session store or Auth Service unreachable
    ServiceUnavailable,
    /// Upstream did not answer within its configured bound
    GatewayTimeout,
}

impl ErrorKind {
    const fn meta(self) -> (u16, &'static str) {
        match self {
            ErrorKind::BadRequest => (400, "Bad Request"),
            ErrorKind::Unauthorized => (401, "Unauthorized"),
            ErrorKind::InternalServerError => (500, "Internal Server Error"),
            ErrorKind::BadGateway => (502, "Bad Gateway"),
            ErrorKind::ServiceUnavailable => (503, "Service Unavailable"),
            ErrorKind::GatewayTimeout => (504, "Gateway Timeout"),
        }
    }

    /// HTTP ステータスコード
    pub const fn status_code(self) -> u16 {
        self.meta().0
    }

    /// Reason phrase, used as the problem `title`
    pub const fn as_str(self) -> &'static str {
        self.meta().1
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
