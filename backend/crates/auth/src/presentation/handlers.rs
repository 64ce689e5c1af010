//! HTTP Handlers

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    CallbackInput, HandleCallbackUseCase, InitiateLoginUseCase, LogoutUseCase, VerifyOutcome,
    VerifySessionUseCase,
};
use crate::domain::repository::{IdentityProvider, SessionStore};
use crate::domain::value_object::{csrf_state::CsrfState, session_id::SessionId};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{CallbackParams, LogoutResponse, SessionIdBody, VerifyResponse};

/// Shared state for auth handlers
pub struct AuthAppState<P, S> {
    pub provider: Arc<P>,
    pub store: Arc<S>,
    pub config: Arc<AuthConfig>,
}

// Manual impl: derive would require `P: Clone + S: Clone`
impl<P, S> Clone for AuthAppState<P, S> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            store: self.store.clone(),
            config: self.config.clone(),
        }
    }
}

/// 302 with `Location`
fn found(location: &str) -> (StatusCode, [(header::HeaderName, String); 1]) {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())])
}

/// Session id from `Authorization: Bearer`, then the session cookie
fn session_id_from_request(
    headers: &HeaderMap,
    jar: &CookieJar,
    config: &AuthConfig,
) -> Option<String> {
    platform::http::bearer_token(headers).or_else(|| {
        jar.get(&config.session_cookie_name)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty())
    })
}

/// Session id from an optional `{"session_id": ...}` body
fn session_id_from_body(body: &Bytes) -> Option<String> {
    if body.is_empty() {
        return None;
    }
    serde_json::from_slice::<SessionIdBody>(body)
        .ok()
        .and_then(|b| b.session_id)
        .filter(|v| !v.is_empty())
}

// ============================================================================
// Login
// ============================================================================

/// GET /login/google
pub async fn login_google<P, S>(
    State(state): State<AuthAppState<P, S>>,
    jar: CookieJar,
) -> impl IntoResponse
where
    P: IdentityProvider + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let redirect = InitiateLoginUseCase::new(state.provider.clone()).execute();
    let jar = jar.add(state.config.state_cookie().build(redirect.state.as_str()));

    (jar, found(&redirect.url))
}

/// GET /auth/google
///
/// The state cookie is single-use and is cleared on every outcome.
pub async fn auth_google<P, S>(
    State(state): State<AuthAppState<P, S>>,
    jar: CookieJar,
    Query(params): Query<CallbackParams>,
) -> Response
where
    P: IdentityProvider + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let expected_state = jar
        .get(&state.config.state_cookie_name)
        .map(|c| CsrfState::from_cookie(c.value()));
    let jar = jar.add(state.config.state_cookie().removal());

    match complete_login(&state, params, expected_state).await {
        Ok(session_id) => {
            let jar = jar.add(state.config.session_cookie().build(session_id.to_string()));
            (jar, found(&state.config.frontend_url)).into_response()
        }
        Err(err) => (jar, err).into_response(),
    }
}

async fn complete_login<P, S>(
    state: &AuthAppState<P, S>,
    params: CallbackParams,
    expected_state: Option<CsrfState>,
) -> AuthResult<SessionId>
where
    P: IdentityProvider + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    if let Some(reason) = params.error {
        return Err(AuthError::ProviderDenied(reason));
    }

    let returned_state = params.state.ok_or(AuthError::InvalidState)?;
    let code = params.code.unwrap_or_default();

    let use_case = HandleCallbackUseCase::new(
        state.provider.clone(),
        state.store.clone(),
        state.config.clone(),
    );

    use_case
        .execute(CallbackInput {
            code: &code,
            returned_state: &returned_state,
            expected_state,
        })
        .await
}

// ============================================================================
// Verify
// ============================================================================

async fn verify_id<S>(
    store: Arc<S>,
    config: Arc<AuthConfig>,
    session_id: &str,
) -> AuthResult<Json<VerifyResponse>>
where
    S: SessionStore + Send + Sync + 'static,
{
    match VerifySessionUseCase::new(store, config).execute(session_id).await? {
        VerifyOutcome::Valid(user) => Ok(Json(VerifyResponse { user, valid: true })),
        VerifyOutcome::Invalid => Err(AuthError::SessionInvalid),
    }
}

/// GET /verify
pub async fn verify<P, S>(
    State(state): State<AuthAppState<P, S>>,
    headers: HeaderMap,
    jar: CookieJar,
) -> AuthResult<Json<VerifyResponse>>
where
    P: IdentityProvider + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let session_id =
        session_id_from_request(&headers, &jar, &state.config).ok_or(AuthError::SessionInvalid)?;

    verify_id(state.store.clone(), state.config.clone(), &session_id).await
}

/// POST /verify
pub async fn verify_post<P, S>(
    State(state): State<AuthAppState<P, S>>,
    headers: HeaderMap,
    jar: CookieJar,
    body: Bytes,
) -> AuthResult<Json<VerifyResponse>>
where
    P: IdentityProvider + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let session_id = session_id_from_request(&headers, &jar, &state.config)
        .or_else(|| session_id_from_body(&body))
        .ok_or(AuthError::MissingParameter("session_id"))?;

    verify_id(state.store.clone(), state.config.clone(), &session_id).await
}

// ============================================================================
// Logout
// ============================================================================

/// GET|POST /logout
pub async fn logout<P, S>(
    State(state): State<AuthAppState<P, S>>,
    headers: HeaderMap,
    jar: CookieJar,
    body: Bytes,
) -> AuthResult<impl IntoResponse>
where
    P: IdentityProvider + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let session_id = session_id_from_request(&headers, &jar, &state.config)
        .or_else(|| session_id_from_body(&body))
        .ok_or(AuthError::MissingParameter("session_id"))?;

    LogoutUseCase::new(state.store.clone())
        .execute(&session_id)
        .await?;

    let jar = jar.add(state.config.session_cookie().removal());

    Ok((jar, Json(LogoutResponse { message: "Logged out" })))
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
