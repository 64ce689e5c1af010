//! Auth Gateway Trait
//!
//! The frontend's only link to session state. Implementations live in the
//! infrastructure layer.

use crate::domain::session_user::SessionUser;
use crate::error::FrontendResult;

#[trait_variant::make(AuthGateway: Send)]
pub trait LocalAuthGateway {
    /// `Ok(Some)` for a live session, `Ok(None)` when the Auth Service says
    /// it is not; errors for everything else
    async fn verify(&self, session_id: &str) -> FrontendResult<Option<SessionUser>>;

    /// Ask the Auth Service to revoke the session
    async fn logout(&self, session_id: &str) -> FrontendResult<()>;
}
