//! transaction-api server entry point.
//!
//! Connects to the store, applies the schema, then serves HTTP until
//! interrupted.

use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use transaction_api::api;
use transaction_api::app_state::AppState;
use transaction_api::config::{AppConfig, LogFormat};
use transaction_api::persistence::{MemoryStore, PostgresStore, TransactionStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::from_env().context("invalid LISTEN_ADDR")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting transaction-api");

    // Build persistence layer
    let store: Arc<dyn TransactionStore> = if config.persistence_enabled {
        let postgres = PostgresStore::connect(&config.database)
            .await
            .context("failed to connect database")?;
        Arc::new(postgres)
    } else {
        tracing::warn!("persistence disabled; transactions are kept in memory");
        Arc::new(MemoryStore::new())
    };
    store.migrate().await.context("failed to migrate schema")?;

    // Build application state and router
    let app_state = AppState::new(store, config.insert_timeout());
    let app = api::build_router(config.body_limit())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl+C.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
