//! Presentation Layer
//!
//! HTTP handlers, pages, router, and middleware.

pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod router;

pub use handlers::FrontendAppState;
pub use middleware::{CurrentUser, require_session};
pub use router::frontend_router;
