//! HTTP Auth Gateway
//!
//! Talks to the Auth Service over HTTP with the session id as a bearer token.
//! No caching and no retry: every protected request asks again.

use axum::http::StatusCode;
use serde::Deserialize;

use crate::application::config::FrontendConfig;
use crate::domain::{AuthGateway, SessionUser};
use crate::error::{FrontendError, FrontendResult};

#[derive(Deserialize)]
struct VerifyBody {
    user: SessionUser,
    #[serde(default)]
    valid: bool,
}

#[derive(Clone)]
pub struct HttpAuthGateway {
    base_url: String,
    http: reqwest::Client,
}

impl HttpAuthGateway {
    pub fn new(config: &FrontendConfig) -> FrontendResult<Self> {
        let http = platform::http::bounded_client(config.auth_timeout)
            .map_err(|e| FrontendError::AuthUnavailable(format!("http client: {e}")))?;

        Ok(Self {
            base_url: config.auth_service_url.clone(),
            http,
        })
    }
}

impl AuthGateway for HttpAuthGateway {
    async fn verify(&self, session_id: &str) -> FrontendResult<Option<SessionUser>> {
        let response = self
            .http
            .get(format!("{}/verify", self.base_url))
            .bearer_auth(session_id)
            .send()
            .await
            .map_err(FrontendError::from_transport)?;

        match response.status() {
            StatusCode::OK => {
                let body: VerifyBody = response
                    .json()
                    .await
                    .map_err(FrontendError::from_transport)?;
                Ok(body.valid.then_some(body.user))
            }
            StatusCode::UNAUTHORIZED => Ok(None),
            other => Err(FrontendError::UnexpectedStatus(other.as_u16())),
        }
    }

    async fn logout(&self, session_id: &str) -> FrontendResult<()> {
        let response = self
            .http
            .post(format!("{}/logout", self.base_url))
            .bearer_auth(session_id)
            .send()
            .await
            .map_err(FrontendError::from_transport)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(FrontendError::UnexpectedStatus(response.status().as_u16()))
        }
    }
}
