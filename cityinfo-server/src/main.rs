//! Entry point: reads configuration, wires providers and serves HTTP until Ctrl-C.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;

use cityinfo_server::{Config, build_service, init_tracing, router, shutdown_signal};

// Used by the library target only.
use cityinfo_core as _;
use cityinfo_provider_openweather as _;
use cityinfo_provider_wikipedia as _;
use reqwest as _;
use serde as _;
use tracing_subscriber as _;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::parse();
    config.validate()?;

    let service = Arc::new(build_service(&config)?);
    let app = router(service);

    let listener = TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!(address = %listener.local_addr()?, "listening for city-info requests");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}
