//! Infrastructure Layer
//!
//! Session store and identity provider implementations.

pub mod google;
pub mod memory;
pub mod redis_store;

pub use google::{GoogleConfig, GoogleProvider};
pub use memory::{MemorySessionStore, spawn_cleanup_task};
pub use redis_store::{RedisConfig, RedisSessionStore};
