//! HTTP transport and process wiring for the city-info service.

/// Command-line and environment configuration.
pub mod config;
/// Routes mapping city-info lookups onto JSON responses.
pub mod http;

use std::future;
use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing_subscriber::EnvFilter;

use cityinfo_core::service::CityInfoService;
use cityinfo_provider_openweather::OpenWeatherPort;
use cityinfo_provider_wikipedia::WikipediaPort;

pub use config::Config;
pub use http::{ErrorResponse, router};

/// Build the aggregation service over the network-backed providers.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be constructed.
pub fn build_service(config: &Config) -> Result<CityInfoService> {
    let client = Client::builder()
        .user_agent(concat!("city-info/", env!("CARGO_PKG_VERSION")))
        .timeout(config.timeout())
        .build()
        .context("failed to build HTTP client")?;

    let weather = OpenWeatherPort::new(client.clone(), config.ows_api_key.clone())
        .with_base_url(config.weather_url.clone());
    let description = WikipediaPort::new(client).with_base_url(config.wiki_url.clone());

    Ok(CityInfoService::new(Arc::new(weather), Arc::new(description)))
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins; otherwise our crates log at `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cityinfo_server=info,cityinfo_core=info")),
        )
        .init();
}

/// Resolve once Ctrl-C is received.
pub async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {err}");
        // Without a signal handler, keep serving until the process is killed.
        future::pending::<()>().await;
    }
}
