//! Frontend Router

use axum::{Router, middleware, routing::get};
use std::sync::Arc;

use crate::application::config::FrontendConfig;
use crate::domain::AuthGateway;
use crate::presentation::handlers::{self, FrontendAppState};
use crate::presentation::middleware::require_session;

/// Create the Frontend router for any gateway implementation
pub fn frontend_router<G>(gateway: G, config: FrontendConfig) -> Router
where
    G: AuthGateway + Send + Sync + 'static,
{
    let state = FrontendAppState {
        gateway: Arc::new(gateway),
        config: Arc::new(config),
    };

    let protected = Router::new()
        .route(
            "/dashboard",
            get(handlers::dashboard).post(handlers::dashboard),
        )
        .route(
            "/settings",
            get(handlers::settings).post(handlers::settings),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session::<G>,
        ));

    Router::new()
        .route("/", get(handlers::index::<G>))
        .route("/login", get(handlers::login::<G>))
        .route(
            "/logout",
            get(handlers::logout::<G>).post(handlers::logout::<G>),
        )
        .route("/health", get(handlers::health))
        .merge(protected)
        .with_state(state)
}
