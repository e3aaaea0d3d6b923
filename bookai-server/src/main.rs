//! BookAI Server - HTTP API over a studio session

use anyhow::Result;
use bookai_server::{config::ServerConfig, routes, state};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookai_server=debug,bookai_core=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Create application state
    let state = state::AppState::new(&config);

    // Build router
    let app = routes::create_router(state, &config);

    // Start server
    tracing::info!(
        latency_ms = config.latency.as_millis() as u64,
        seed_samples = config.seed_samples,
        "Starting server on {}",
        config.addr
    );

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
