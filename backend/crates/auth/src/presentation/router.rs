//! Auth Router

use axum::{
    Router,
    routing::get,
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{IdentityProvider, SessionStore};
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router for any provider and store implementation
pub fn auth_router<P, S>(provider: P, store: S, config: AuthConfig) -> Router
where
    P: IdentityProvider + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let state = AuthAppState {
        provider: Arc::new(provider),
        store: Arc::new(store),
        config: Arc::new(config),
    };

    Router::new()
        .route("/login/google", get(handlers::login_google::<P, S>))
        .route("/auth/google", get(handlers::auth_google::<P, S>))
        .route(
            "/verify",
            get(handlers::verify::<P, S>).post(handlers::verify_post::<P, S>),
        )
        .route(
            "/logout",
            get(handlers::logout::<P, S>).post(handlers::logout::<P, S>),
        )
        .route("/health", get(handlers::health))
        .with_state(state)
}
