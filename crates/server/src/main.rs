use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use trivia_server::api::{AppState, create_router};
use trivia_server::config::ServerConfig;
use trivia_server::db::init_pool_and_migrate;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    info!("starting trivia server");
    let config = ServerConfig::load().context("failed to load server config")?;

    info!(database = %config.redacted_database_url(), "connecting to database");
    let db = init_pool_and_migrate(&config).await?;

    let state = Arc::new(AppState::from_connection(db, config.page_size));
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, page_size = config.page_size, "server is ready, press Ctrl+C to shut down");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown signal received, stopping server");
}

fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}
