//! comicache server entry point.
//!
//! Boots a read-through caching HTTP front for an xkcd-style comic provider.
//! Logging goes to stderr as JSON.

use std::sync::Arc;

use anyhow::Result;
use comicache_client::{FetchConfig, XkcdClient};
use comicache_core::{AppConfig, SystemClock};
use tracing_subscriber::EnvFilter;

mod error;
mod handler;
mod routes;
mod service;
#[cfg(test)]
mod testing;

use service::{ComicService, ServiceConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;

    let source = XkcdClient::new(&config.provider_base_url, FetchConfig::from(&config))?;
    let service = Arc::new(ComicService::new(Arc::new(source), Arc::new(SystemClock), ServiceConfig::from(&config)));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        provider = %config.provider_base_url,
        latest_ttl_secs = config.latest_ttl_secs,
        "comicache listening"
    );

    axum::serve(listener, handler::router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("comicache stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
