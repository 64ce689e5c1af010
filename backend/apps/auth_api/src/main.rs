//! Auth Service Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but request-level
//! errors should use `kernel::error::AppError`.

use auth::{
    AuthConfig, GoogleConfig, GoogleProvider, MemorySessionStore, RedisConfig, RedisSessionStore,
    auth_router,
    store::{DEFAULT_CLEANUP_INTERVAL_SECS, spawn_cleanup_task},
};
use axum::Router;
use platform::config::{ProcessEnv, Settings};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// `RUST_LOG` wins; `LOG_LEVEL` is a plain level applied to this service
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = std::env::var("LOG_LEVEL")
            .map(|l| l.to_ascii_lowercase())
            .unwrap_or_else(|_| "info".to_string());
        format!("auth_api={level},auth={level},tower_http={level}").into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let env = ProcessEnv;
    let settings = Settings::new(&env);

    let config = AuthConfig::from_source(&settings).inspect_err(|e| {
        tracing::error!(error = %e, "Invalid auth configuration");
    })?;
    let google_config = GoogleConfig::from_source(&settings).inspect_err(|e| {
        tracing::error!(error = %e, "Invalid Google OAuth configuration");
    })?;
    let port: u16 = settings.parse_or("PORT_AUTH", 8000)?;

    tracing::info!(
        session_ttl_secs = config.session_ttl_secs(),
        expiry = ?config.expiry_policy,
        cookie_secure = config.cookie_secure,
        "Auth configuration loaded"
    );

    let provider = GoogleProvider::new(google_config)?;

    // Session store
    let app: Router = match settings.string_or("SESSION_STORE", "redis").as_str() {
        "memory" => {
            tracing::warn!("Using in-memory session store; sessions are not shared between processes");
            let store = MemorySessionStore::new();
            spawn_cleanup_task(store.clone(), Duration::from_secs(DEFAULT_CLEANUP_INTERVAL_SECS));
            auth_router(provider, store, config)
        }
        "redis" => {
            let redis_config = RedisConfig::from_source(&settings)?;
            let store = RedisSessionStore::connect(&redis_config)
                .await
                .inspect_err(|e| tracing::error!(error = %e, "Failed to connect to Redis"))?;
            auth_router(provider, store, config)
        }
        other => anyhow::bail!("Unknown SESSION_STORE: {other} (expected redis or memory)"),
    };

    let app = app.layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
