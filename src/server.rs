//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, migrations, Axum server lifecycle and graceful
//! shutdown.

use crate::config::{Config, StoreBackend};
use crate::domain::repositories::ProductRepository;
use crate::infrastructure::persistence::{InMemoryProductRepository, PgProductRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Store connection (PostgreSQL pool or in-memory)
/// - Migrations
/// - Axum HTTP server with graceful shutdown
///
/// An unreachable store at boot is logged and the server starts anyway;
/// requests fail with 500 until the store comes up.
///
/// # Errors
///
/// Returns an error if:
/// - The database URL cannot be parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (repository, pool): (Arc<dyn ProductRepository>, Option<Arc<PgPool>>) =
        match config.store_backend {
            StoreBackend::Postgres => {
                let pool = Arc::new(connect_pool(&config)?);
                prepare_store(&pool).await;
                (Arc::new(PgProductRepository::new(pool.clone())), Some(pool))
            }
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory store; data is lost on shutdown");
                (Arc::new(InMemoryProductRepository::new()), None)
            }
        };

    let state = AppState::new(repository);
    let app = app_router(state);

    let addr = config.listen_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Ready to handle requests on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = pool {
        pool.close().await;
        tracing::info!("Store connections closed");
    }

    Ok(())
}

/// Builds the connection pool without opening a connection.
fn connect_pool(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect_lazy(&config.database_url)?;

    Ok(pool)
}

/// Checks connectivity and applies migrations. Failures are logged only.
async fn prepare_store(pool: &PgPool) {
    match sqlx::migrate!("./migrations").run(pool).await {
        Ok(()) => tracing::info!("Connected to store, migrations applied"),
        Err(e) => tracing::error!(
            error = %e,
            "Store unavailable at startup; requests will fail until it is reachable"
        ),
    }
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining in-flight requests");
}
