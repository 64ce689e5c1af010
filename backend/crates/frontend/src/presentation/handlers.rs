//! HTTP Handlers

use axum::Extension;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

use crate::application::config::FrontendConfig;
use crate::application::{CheckSessionUseCase, LogoutUseCase};
use crate::domain::AuthGateway;
use crate::presentation::middleware::CurrentUser;
use crate::presentation::pages;

/// Shared state for frontend handlers
pub struct FrontendAppState<G> {
    pub gateway: Arc<G>,
    pub config: Arc<FrontendConfig>,
}

impl<G> Clone for FrontendAppState<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            config: self.config.clone(),
        }
    }
}

fn session_cookie(jar: &CookieJar, config: &FrontendConfig) -> Option<String> {
    jar.get(&config.session_cookie_name)
        .map(|c| c.value().to_string())
}

fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// True when the visitor already holds a live session
async fn logged_in<G>(state: &FrontendAppState<G>, jar: &CookieJar) -> bool
where
    G: AuthGateway + Send + Sync + 'static,
{
    let session_id = session_cookie(jar, &state.config);
    CheckSessionUseCase::new(state.gateway.clone())
        .execute(session_id.as_deref())
        .await
        .is_some()
}

/// GET /
pub async fn index<G>(State(state): State<FrontendAppState<G>>, jar: CookieJar) -> Response
where
    G: AuthGateway + Send + Sync + 'static,
{
    if logged_in(&state, &jar).await {
        return found("/dashboard");
    }
    Html(pages::home()).into_response()
}

/// GET /login
pub async fn login<G>(State(state): State<FrontendAppState<G>>, jar: CookieJar) -> Response
where
    G: AuthGateway + Send + Sync + 'static,
{
    if logged_in(&state, &jar).await {
        tracing::info!("User already logged in, redirecting");
        return found("/dashboard");
    }
    Html(pages::login(&state.config.login_url())).into_response()
}

/// GET|POST /dashboard
pub async fn dashboard(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Html<String> {
    Html(pages::dashboard(&user))
}

/// GET|POST /settings
pub async fn settings(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Html<String> {
    Html(pages::settings(&user))
}

/// GET|POST /logout
///
/// The cookie is cleared even when the Auth Service cannot be reached.
pub async fn logout<G>(State(state): State<FrontendAppState<G>>, jar: CookieJar) -> Response
where
    G: AuthGateway + Send + Sync + 'static,
{
    let session_id = session_cookie(&jar, &state.config);
    LogoutUseCase::new(state.gateway.clone())
        .execute(session_id.as_deref())
        .await;

    let jar = jar.add(state.config.session_cookie().removal());
    (jar, found("/")).into_response()
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
