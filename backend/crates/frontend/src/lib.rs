//! Web Frontend Module
//!
//! Thin consumer of the Auth Service. Holds no session state of its own: the
//! browser's session cookie is forwarded to `/verify` on every protected
//! request, and any failure counts as logged out.
//!
//! Clean Architecture structure:
//! - `domain/` - Session user, auth gateway trait
//! - `application/` - Use cases and configuration
//! - `infra/` - HTTP gateway to the Auth Service
//! - `presentation/` - Pages, handlers, middleware, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::FrontendConfig;
pub use error::{FrontendError, FrontendResult};
pub use infra::HttpAuthGateway;
pub use presentation::router::frontend_router;

#[cfg(test)]
mod tests;
