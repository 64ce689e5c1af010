//! HTTP rendering
//!
//! The RFC 7807 problem body returned for every error response.

use serde::Serialize;

use super::app_error::AppError;

/// RFC 7807 problem details
#[derive(Debug, Serialize)]
pub struct Problem<'a> {
    #[serde(rename = "type")]
    pub type_uri: &'static str,
    pub title: &'static str,
    pub status: u16,
    pub detail: &'a str,
}

impl AppError {
    pub fn problem(&self) -> Problem<'_> {
        Problem {
            type_uri: "about:blank",
            title: self.kind().as_str(),
            status: self.status_code(),
            detail: self.message(),
        }
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::{HeaderValue, StatusCode, header};

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = (status, axum::Json(self.problem())).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );
        response
    }
}
