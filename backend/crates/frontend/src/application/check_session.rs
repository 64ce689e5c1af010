//! Check Session Use Case
//!
//! Fail-closed wrapper around [`AuthGateway::verify`].

use std::sync::Arc;

use crate::domain::{AuthGateway, SessionUser};

/// Check session use case
pub struct CheckSessionUseCase<G>
where
    G: AuthGateway,
{
    gateway: Arc<G>,
}

impl<G> CheckSessionUseCase<G>
where
    G: AuthGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// The logged-in user, or `None` for no cookie, a dead session, or any
    /// failure reaching the Auth Service
    pub async fn execute(&self, session_id: Option<&str>) -> Option<SessionUser> {
        let session_id = session_id.filter(|id| !id.is_empty())?;

        match self.gateway.verify(session_id).await {
            Ok(Some(user)) => Some(user),
            Ok(None) => {
                tracing::debug!("Session rejected by auth service");
                None
            }
            Err(e) => {
                e.log();
                None
            }
        }
    }
}
