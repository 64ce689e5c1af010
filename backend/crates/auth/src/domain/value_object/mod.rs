//! Value Object Module

pub mod csrf_state;
pub mod session_id;
pub mod user_identity;
