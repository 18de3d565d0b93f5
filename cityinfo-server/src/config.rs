//! Server settings, read from flags with environment fallbacks.

use std::time::Duration;

use anyhow::{Result, bail};
use clap::Parser;

use cityinfo_provider_openweather::DEFAULT_BASE_URL as WEATHER_BASE_URL;
use cityinfo_provider_wikipedia::DEFAULT_BASE_URL as WIKI_BASE_URL;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "city-info",
    version,
    about = "Serves the current weather and a short description of a city"
)]
/// Runtime configuration of the server.
pub struct Config {
    /// `OpenWeatherMap` API key used to authenticate weather requests.
    #[arg(long, env = "OWS_API_KEY", hide_env_values = true)]
    pub ows_api_key: String,

    /// Address to listen on.
    #[arg(long, env = "CITY_INFO_BIND", default_value = "localhost:8181")]
    pub bind: String,

    /// Root of the `OpenWeatherMap` API.
    #[arg(long, env = "CITY_INFO_WEATHER_URL", default_value = WEATHER_BASE_URL)]
    pub weather_url: String,

    /// Wikipedia `api.php` endpoint.
    #[arg(long, env = "CITY_INFO_WIKI_URL", default_value = WIKI_BASE_URL)]
    pub wiki_url: String,

    /// Timeout for each upstream HTTP request, in seconds.
    #[arg(long, env = "CITY_INFO_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,
}

impl Config {
    /// Reject settings the server cannot start with.
    ///
    /// # Errors
    ///
    /// Returns an error when the API key is blank or the timeout is zero.
    pub fn validate(&self) -> Result<()> {
        if self.ows_api_key.trim().is_empty() {
            bail!("OWS_API_KEY environment variable not set, exiting");
        }
        if self.timeout_secs == 0 {
            bail!("timeout must be at least one second");
        }
        Ok(())
    }

    /// Per-request timeout handed to the HTTP client.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
