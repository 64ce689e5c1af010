//! Logout Use Case
//!
//! Best-effort revocation. The cookie is cleared by the caller regardless.

use std::sync::Arc;

use crate::domain::AuthGateway;

/// Logout use case
pub struct LogoutUseCase<G>
where
    G: AuthGateway,
{
    gateway: Arc<G>,
}

impl<G> LogoutUseCase<G>
where
    G: AuthGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, session_id: Option<&str>) {
        let Some(session_id) = session_id.filter(|id| !id.is_empty()) else {
            tracing::debug!("No session cookie present; skipping auth service call");
            return;
        };

        match self.gateway.logout(session_id).await {
            Ok(()) => tracing::info!("Auth service notified of logout"),
            Err(e) => e.log(),
        }
    }
}
