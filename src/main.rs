use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use portico::api::build_router;
use portico::config::AppConfig;
use portico::observability::init_tracing;
use portico::storage::{create_pool, SqlRouteStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    init_tracing(&config.observability).context("Failed to initialize tracing")?;

    info!(
        app_name = portico::APP_NAME,
        version = portico::VERSION,
        "Starting Portico backend"
    );

    let pool = create_pool(&config.database).await.context("Failed to create database pool")?;
    let route_store = Arc::new(SqlRouteStore::new(pool));

    let router = build_router(route_store);
    let bind_address = config.server.bind_address();

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    info!(address = %bind_address, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %error, "Failed to listen for shutdown signal");
    }
}
