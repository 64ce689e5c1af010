//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::value_object::user_identity::UserIdentity;

/// Query string of the provider redirect (`/auth/google`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    /// Set by the provider when the user cancels or consent fails
    pub error: Option<String>,
}

/// JSON body accepted by `POST /verify` and `POST /logout`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionIdBody {
    pub session_id: Option<String>,
}

/// Verify response
#[derive(Debug, Clone, Serialize)]
pub struct VerifyResponse {
    pub user: UserIdentity,
    pub valid: bool,
}

/// Logout response
#[derive(Debug, Clone, Serialize)]
pub struct LogoutResponse {
    pub message: &'static str,
}
