//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of the HTTP error contract:
//! - Common error types and result aliases
//! - HTTP problem-detail rendering (feature `axum`)
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have a consistent meaning for every client.

pub mod error {
    pub mod app_error;
    pub mod kind;
    pub mod problem;
}

pub use error::app_error::{AppError, AppResult};
pub use error::kind::ErrorKind;
