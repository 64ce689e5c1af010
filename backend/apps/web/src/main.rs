//! Web Frontend Entry Point

use frontend::{FrontendConfig, HttpAuthGateway, frontend_router};
use platform::config::{ProcessEnv, Settings};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = std::env::var("LOG_LEVEL")
            .map(|l| l.to_ascii_lowercase())
            .unwrap_or_else(|_| "warn".to_string());
        format!("web={level},frontend={level},tower_http={level}").into()
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

    let config = FrontendConfig::from_source(&settings).inspect_err(|e| {
        tracing::error!(error = %e, "Invalid frontend configuration");
    })?;
    // Port variable name kept for existing deployments
    let port: u16 = settings.parse_or("PORT_FLASK", 5000)?;

    tracing::info!(
        auth_service = %config.auth_service_url,
        auth_public = %config.auth_public_url,
        "Frontend configuration loaded"
    );

    let gateway = HttpAuthGateway::new(&config)?;

    let app = frontend_router(gateway, config).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
