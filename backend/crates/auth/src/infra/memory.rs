//! In-Memory Session Store
//!
//! Single-process stand-in for Redis, used by tests and `SESSION_STORE=memory`.
//! Expired entries are never returned by `get`; [`spawn_cleanup_task`] evicts
//! them in the background so memory does not grow without bound.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::{Instant, interval};

use crate::domain::repository::SessionStore;
use crate::error::AuthResult;

/// Default sweep interval
pub const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 60;

struct Entry {
    value: String,
    expires_at: Instant,
}

#[derive(Clone, Default)]
pub struct MemorySessionStore {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop expired entries, returning how many were removed
    pub async fn evict_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        before - entries.len()
    }

    /// Number of stored entries, expired or not
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl SessionStore for MemorySessionStore {
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> AuthResult<()> {
        let entry = Entry {
            value: value.to_string(),
            expires_at: Instant::now() + Duration::from_secs(ttl_seconds.max(1)),
        };
        self.entries.write().await.insert(key.to_string(), entry);
        Ok(())
    }

    async fn get(&self, key: &str) -> AuthResult<Option<String>> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.value.clone()))
    }

    async fn refresh(&self, key: &str, value: &str, ttl_seconds: u64) -> AuthResult<bool> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        match entries.get_mut(key).filter(|entry| entry.expires_at > now) {
            Some(entry) => {
                entry.value = value.to_string();
                entry.expires_at = now + Duration::from_secs(ttl_seconds.max(1));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, key: &str) -> AuthResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

/// Spawn a background task that periodically evicts expired entries.
///
/// Returns a `JoinHandle` that can be used to abort the task.
pub fn spawn_cleanup_task(
    store: MemorySessionStore,
    cleanup_interval: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(cleanup_interval);

        // Skip the first immediate tick
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let evicted = store.evict_expired().await;
            if evicted > 0 {
                tracing::info!(evicted, "Session cleanup completed");
            } else {
                tracing::debug!("Session cleanup: no expired sessions");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_entry_expires_after_ttl() {
        let store = MemorySessionStore::new();
        store.put("session:a", "{}", 1).await.unwrap();
        assert_eq!(store.get("session:a").await.unwrap().as_deref(), Some("{}"));

        tokio::time::advance(Duration::from_secs(2)).await;
        assert_eq!(store.get("session:a").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemorySessionStore::new();
        store.put("k", "v", 60).await.unwrap();
        store.delete("k").await.unwrap();
        store.delete("k").await.unwrap();
        assert!(store.get("k").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_replaces_value() {
        let store = MemorySessionStore::new();
        store.put("k", "one", 60).await.unwrap();
        store.put("k", "two", 60).await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("two"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_only_touches_live_entries() {
        let store = MemorySessionStore::new();
        assert!(!store.refresh("gone", "v", 60).await.unwrap());
        assert!(store.get("gone").await.unwrap().is_none());

        store.put("k", "one", 2).await.unwrap();
        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(store.refresh("k", "two", 2).await.unwrap());

        // past the original expiry, inside the refreshed one
        tokio::time::advance(Duration::from_millis(1500)).await;
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("two"));

        store.delete("k").await.unwrap();
        assert!(!store.refresh("k", "three", 60).await.unwrap());
        assert!(store.get("k").await.unwrap().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cleanup_task_evicts() {
        let store = MemorySessionStore::new();
        store.put("short", "v", 1).await.unwrap();
        store.put("long", "v", 600).await.unwrap();

        let handle = spawn_cleanup_task(store.clone(), Duration::from_secs(5));
        tokio::time::sleep(Duration::from_secs(6)).await;
        tokio::task::yield_now().await;

        assert_eq!(store.len().await, 1);
        handle.abort();
    }
}
