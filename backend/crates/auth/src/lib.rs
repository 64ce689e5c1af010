//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session record, value objects, store/provider traits
//! - `application/` - Use cases and configuration
//! - `infra/` - Redis / in-memory session stores, Google provider
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Google OAuth2 authorization-code login with CSRF state cookie
//! - Opaque server-side sessions in a shared key-value store
//! - Session verification for other services (`/verify`)
//! - Idempotent logout
//!
//! ## Security Model
//! - Session ids are 256-bit random, base64url encoded
//! - Only the session id ever reaches the browser (HTTP-only cookie)
//! - Any verification failure is "not authenticated"; store errors never grant access
//! - Provider and store details are logged, never returned to clients

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{AuthConfig, ExpiryPolicy};
pub use error::{AuthError, AuthResult};
pub use infra::{GoogleConfig, GoogleProvider, MemorySessionStore, RedisConfig, RedisSessionStore};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::domain::repository::SessionStore;
    pub use crate::infra::memory::{DEFAULT_CLEANUP_INTERVAL_SECS, spawn_cleanup_task};
    pub use crate::infra::{MemorySessionStore, RedisSessionStore};
}
