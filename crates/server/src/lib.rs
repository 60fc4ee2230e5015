pub mod config;
pub mod routes;

use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;

use barakah_core::errors::CoreError;
use barakah_core::BarakahNav;
use config::{ConfigError, ServerConfig};

/// Anything that stops the server from starting or serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Seeding failed: {0}")]
    Seed(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Seed the NAV store from `config`. Runs once, before the listener binds.
pub fn seed(config: &ServerConfig) -> Result<BarakahNav, ServerError> {
    let nav = BarakahNav::seeded(&config.generator_settings())?;
    info!(funds = ?config.funds, days = config.days, "NAV series generated");
    Ok(nav)
}

/// Seed, bind and serve until Ctrl+C.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let nav = seed(&config)?;
    let app = routes::router(Arc::new(nav));

    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!("Barakah NAV service listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Barakah NAV service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
}
