//! Domain Layer

pub mod gateway;
pub mod session_user;

pub use gateway::AuthGateway;
pub use session_user::SessionUser;
