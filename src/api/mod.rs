//! HTTP API: create and list heroes.
//!
//! The router's only state is the shared [`HeroDatabase`]; every request
//! opens and closes its own unit-of-work.

pub mod error;
pub mod routes;

use crate::{storage::HeroDatabase, Result};
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use error::ApiError;

/// Server bind configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Build the application router
pub fn build_router(db: HeroDatabase) -> Router {
    Router::new()
        .route("/heroes", get(routes::list_heroes).post(routes::create_hero))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

/// Bind the configured address. `host` may be a name such as `localhost`
/// or a bare IPv6 literal.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener> {
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    Ok(listener)
}

/// Materialize the tables, then serve until Ctrl+C or SIGTERM.
pub async fn serve(db: HeroDatabase, config: ServerConfig) -> Result<()> {
    db.create_db_and_tables()?;

    let listener = bind(&config).await?;
    info!("Serving heroes on http://{}", listener.local_addr()?);
    info!("Database: {}", db.path().display());

    axum::serve(listener, build_router(db))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
