//! Domain Layer
//!
//! Contains entities, value objects, and the store/provider traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::session_record::SessionRecord;
pub use repository::{IdentityProvider, ProviderTokens, SessionStore};
pub use value_object::{csrf_state::CsrfState, session_id::SessionId, user_identity::UserIdentity};
