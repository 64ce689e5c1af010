//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod config;
pub mod logout;

// Re-exports
pub use check_session::CheckSessionUseCase;
pub use config::FrontendConfig;
pub use logout::LogoutUseCase;
