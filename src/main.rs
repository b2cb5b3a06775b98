//! Taskdeck server binary.
//!
//! Resolves configuration from CLI arguments and the environment,
//! initialises tracing, selects a task store, and serves the HTTP API
//! until SIGINT or SIGTERM triggers a graceful shutdown.

use clap::Parser;
use mockable::DefaultClock;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;

use taskdeck::config::ServerConfig;
use taskdeck::http::middleware::rate_limit::FixedWindowLimiter;
use taskdeck::http::{AppState, RouterError, build_router};
use taskdeck::task::adapters::memory::InMemoryTaskStore;
use taskdeck::task::adapters::postgres::{PostgresTaskStore, build_pool};
use taskdeck::task::ports::{TaskStore, TaskStoreError};
use taskdeck::task::services::TaskService;

#[derive(Debug, Error)]
enum ServerError {
    #[error("router setup failed: {0}")]
    Router(#[from] RouterError),

    #[error("store setup failed: {0}")]
    Store(#[from] TaskStoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if let Err(err) = run(config).await {
        tracing::error!(error = %err, "error starting the server");
        std::process::exit(1);
    }
}

async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let store = build_store(&config)?;
    let clock = Arc::new(DefaultClock);
    let service = TaskService::new(store, clock.clone());
    let limiter = Arc::new(FixedWindowLimiter::new(
        config.rate_limit_window_ms,
        config.rate_limit_max,
        clock,
    ));
    let state = AppState::new(service, limiter);
    let router = build_router(state, &config.cors_origin)?;

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "server started listening");

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("HTTP server closed gracefully");
    Ok(())
}

/// Selects the task store from configuration.
///
/// A configured database URL selects `PostgreSQL`; otherwise the process
/// falls back to the in-memory store.
fn build_store(config: &ServerConfig) -> Result<Arc<dyn TaskStore>, TaskStoreError> {
    match config.database_url.as_deref() {
        Some(url) => {
            let pool = build_pool(url)?;
            tracing::info!("PostgreSQL connection pool ready");
            Ok(Arc::new(PostgresTaskStore::new(pool)))
        }
        None => {
            tracing::warn!("no database URL configured; using the in-memory task store");
            Ok(Arc::new(InMemoryTaskStore::new()))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received SIGINT signal"),
        () = terminate => tracing::info!("received SIGTERM signal"),
    }
    tracing::info!("shutting down server");
}
