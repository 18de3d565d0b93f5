//! High-level service facade combining the weather and description providers.

use std::sync::Arc;

use tokio::task::JoinError;

use crate::model::CityInfo;
use crate::ports::{DescriptionPort, ErrorKind, PortError, WeatherPort};
use crate::sink::{ErrorSink, TracingSink};

#[derive(thiserror::Error, Debug)]
/// Failure of a single aggregation call, tagged with the provider that failed.
pub enum LookupError {
    /// The weather provider failed.
    #[error("could not fetch weather for '{city}': {source}")]
    Weather {
        /// City name as supplied by the caller.
        city: String,
        /// Error reported by the provider.
        source: PortError,
    },
    /// The description provider failed.
    #[error("could not fetch description for '{city}': {source}")]
    Description {
        /// City name as supplied by the caller.
        city: String,
        /// Error reported by the provider.
        source: PortError,
    },
}

impl LookupError {
    /// City the failed call was made for.
    #[must_use]
    pub fn city(&self) -> &str {
        match self {
            LookupError::Weather { city, .. } | LookupError::Description { city, .. } => city,
        }
    }

    /// Short name of the provider that failed: `"weather"` or `"description"`.
    #[must_use]
    pub fn source_name(&self) -> &'static str {
        match self {
            LookupError::Weather { .. } => "weather",
            LookupError::Description { .. } => "description",
        }
    }

    /// Kind of the wrapped provider error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::Weather { source, .. } | LookupError::Description { source, .. } => {
                source.kind()
            }
        }
    }
}

/// Public entry point for looking up current information about a city.
pub struct CityInfoService {
    weather: Arc<dyn WeatherPort>,
    description: Arc<dyn DescriptionPort>,
    sink: Arc<dyn ErrorSink>,
}

impl CityInfoService {
    /// Create a new service over the given providers, logging failures via `tracing`.
    #[must_use]
    pub fn new(weather: Arc<dyn WeatherPort>, description: Arc<dyn DescriptionPort>) -> Self {
        Self {
            weather,
            description,
            sink: Arc::new(TracingSink),
        }
    }

    /// Replace the sink that receives failed lookups.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn ErrorSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Look up the current weather and description of `city`.
    ///
    /// Both lookups are spawned as separate tasks and always run to
    /// completion, even when the other one has already failed. The name is
    /// passed to the providers unchanged.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] when either provider fails. When both fail,
    /// the weather error is returned; both are recorded to the sink.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a Tokio runtime.
    pub async fn current_status(&self, city: &str) -> Result<CityInfo, LookupError> {
        let name: Arc<str> = Arc::from(city);

        let weather_task = tokio::spawn({
            let port = Arc::clone(&self.weather);
            let name = Arc::clone(&name);
            async move { port.weather(&name).await }
        });
        let description_task = tokio::spawn({
            let port = Arc::clone(&self.description);
            let name = Arc::clone(&name);
            async move { port.description(&name).await }
        });

        let (weather, description) = tokio::join!(weather_task, description_task);

        let weather = settle(weather).map_err(|source| {
            self.fail(LookupError::Weather {
                city: city.to_owned(),
                source,
            })
        });
        let description = settle(description).map_err(|source| {
            self.fail(LookupError::Description {
                city: city.to_owned(),
                source,
            })
        });

        match (weather, description) {
            (Ok(weather), Ok(description)) => {
                tracing::debug!(city, "resolved city info");
                Ok(CityInfo::new(weather, description))
            }
            (Err(err), _) | (Ok(_), Err(err)) => Err(err),
        }
    }

    fn fail(&self, error: LookupError) -> LookupError {
        self.sink.record(&error);
        error
    }
}

// A panicked lookup task is reported like any other provider failure.
fn settle<T>(joined: Result<Result<T, PortError>, JoinError>) -> Result<T, PortError> {
    joined.unwrap_or_else(|err| Err(PortError::Internal(format!("lookup task failed: {err}"))))
}
