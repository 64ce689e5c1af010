//! Redis Session Store
//!
//! `SET key value EX ttl` / `GET` / `DEL` over one multiplexed connection
//! shared by every handler. Each command is bounded by a timeout so a stalled
//! Redis surfaces as [`AuthError::StoreUnavailable`] instead of a hung request.

use std::time::Duration;

use platform::config::{ConfigError, EnvSource, Settings};
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, ExistenceCheck, SetExpiry, SetOptions};

use crate::domain::repository::SessionStore;
use crate::error::{AuthError, AuthResult};

/// Redis connection settings
#[derive(Clone)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    pub db: i64,
    pub tls: bool,
    pub password: Option<String>,
    /// Upper bound for connect and for every command
    pub timeout: Duration,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 6379,
            db: 0,
            tls: false,
            password: None,
            timeout: Duration::from_secs(2),
        }
    }
}

impl std::fmt::Debug for RedisConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("db", &self.db)
            .field("tls", &self.tls)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl RedisConfig {
    /// Load from `REDIS_*` and `STORE_TIMEOUT_SECONDS`
    pub fn from_source<S: EnvSource + ?Sized>(settings: &Settings<'_, S>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: settings.string_or("REDIS_HOST", "localhost"),
            port: settings.parse_or("REDIS_PORT", 6379)?,
            db: settings.parse_or("REDIS_DB", 0)?,
            tls: settings.flag_or("REDIS_SSL", false)?,
            password: settings.optional("REDIS_PASSWORD"),
            timeout: Duration::from_secs(settings.parse_or("STORE_TIMEOUT_SECONDS", 2)?),
        })
    }

    /// Connection URL (`redis://` or `rediss://`)
    pub fn url(&self) -> String {
        let scheme = if self.tls { "rediss" } else { "redis" };
        let auth = match &self.password {
            Some(password) => format!(":{}@", urlencoding::encode(password)),
            None => String::new(),
        };
        format!("{scheme}://{auth}{}:{}/{}", self.host, self.port, self.db)
    }
}

/// Redis-backed session store
#[derive(Clone)]
pub struct RedisSessionStore {
    connection: MultiplexedConnection,
    timeout: Duration,
}

impl RedisSessionStore {
    /// Open the client and establish the multiplexed connection
    pub async fn connect(config: &RedisConfig) -> AuthResult<Self> {
        let client = redis::Client::open(config.url())?;

        let connection = tokio::time::timeout(config.timeout, client.get_multiplexed_async_connection())
            .await
            .map_err(|_| AuthError::StoreUnavailable("connect timed out".to_string()))??;

        tracing::info!(
            host = %config.host,
            port = config.port,
            db = config.db,
            tls = config.tls,
            "Connected to Redis session store"
        );

        Ok(Self {
            connection,
            timeout: config.timeout,
        })
    }

    async fn bounded<T, F>(&self, op: &'static str, fut: F) -> AuthResult<T>
    where
        F: Future<Output = redis::RedisResult<T>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result.map_err(|e| AuthError::StoreUnavailable(format!("{op}: {e}"))),
            Err(_) => Err(AuthError::StoreUnavailable(format!("{op}: timed out"))),
        }
    }
}

impl SessionStore for RedisSessionStore {
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> AuthResult<()> {
        let mut conn = self.connection.clone();
        self.bounded("SET", async move {
            let _: () = conn.set_ex(key, value, ttl_seconds.max(1)).await?;
            Ok(())
        })
        .await
    }

    async fn get(&self, key: &str) -> AuthResult<Option<String>> {
        let mut conn = self.connection.clone();
        self.bounded("GET", async move { conn.get(key).await }).await
    }

    async fn refresh(&self, key: &str, value: &str, ttl_seconds: u64) -> AuthResult<bool> {
        let mut conn = self.connection.clone();
        let options = SetOptions::default()
            .conditional_set(ExistenceCheck::XX)
            .with_expiration(SetExpiry::EX(ttl_seconds.max(1)));

        // SET ... XX replies nil when the key is gone
        self.bounded("SET XX", async move {
            let reply: Option<String> = conn.set_options(key, value, options).await?;
            Ok(reply.is_some())
        })
        .await
    }

    async fn delete(&self, key: &str) -> AuthResult<()> {
        let mut conn = self.connection.clone();
        self.bounded("DEL", async move {
            let _: () = conn.del(key).await?;
            Ok(())
        })
        .await
    }
}
