//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod handle_callback;
pub mod initiate_login;
pub mod logout;
pub mod verify_session;

// Re-exports
pub use config::{AuthConfig, ExpiryPolicy};
pub use handle_callback::{CallbackInput, HandleCallbackUseCase};
pub use initiate_login::{InitiateLoginUseCase, LoginRedirect};
pub use logout::LogoutUseCase;
pub use verify_session::{VerifyOutcome, VerifySessionUseCase};
