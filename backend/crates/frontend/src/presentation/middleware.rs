//! Session Middleware
//!
//! Middleware for requiring a live session on protected routes.

use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;

use crate::application::CheckSessionUseCase;
use crate::domain::{AuthGateway, SessionUser};
use crate::presentation::handlers::FrontendAppState;

/// Logged-in user, stored in request extensions by [`require_session`]
#[derive(Debug, Clone)]
pub struct CurrentUser(pub SessionUser);

/// Middleware that requires a live session
///
/// On failure the cookie is cleared and the browser is sent to `/login`.
pub async fn require_session<G>(
    State(state): State<FrontendAppState<G>>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response
where
    G: AuthGateway + Send + Sync + 'static,
{
    let session_id = jar
        .get(&state.config.session_cookie_name)
        .map(|c| c.value().to_string());

    let use_case = CheckSessionUseCase::new(state.gateway.clone());

    match use_case.execute(session_id.as_deref()).await {
        Some(user) => {
            req.extensions_mut().insert(CurrentUser(user));
            next.run(req).await
        }
        None => {
            let jar = jar.add(state.config.session_cookie().removal());
            (StatusCode::FOUND, jar, [(header::LOCATION, "/login")]).into_response()
        }
    }
}
