//! Traits describing provider capabilities and shared error types.

use std::fmt;

use async_trait::async_trait;
use reqwest::Error as ReqwestError;

use crate::model::Weather;

/// Message used by every provider when handed an empty city name.
pub const EMPTY_NAME: &str = "invalid name; should be non empty string";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Coarse classification of a provider failure.
pub enum ErrorKind {
    /// The caller supplied an empty or malformed city name.
    InvalidInput,
    /// The provider has no entry for the requested city.
    NotFound,
    /// Network, decoding or unexpected-shape failure upstream.
    UpstreamFailure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::InvalidInput => "invalid input",
            ErrorKind::NotFound => "not found",
            ErrorKind::UpstreamFailure => "upstream failure",
        };
        write!(formatter, "{label}")
    }
}

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while talking to provider backends.
pub enum PortError {
    /// City name rejected before any request was made.
    #[error("{0}")]
    InvalidName(String),
    /// Provider found no matching city or article.
    #[error("{0}")]
    NotFound(String),
    /// Network layer or response decoding failed.
    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),
    /// Provider answered with a payload we could not make sense of.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
    /// Internal provider error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PortError {
    /// Rejection for an empty city name.
    #[must_use]
    pub fn empty_name() -> Self {
        PortError::InvalidName(EMPTY_NAME.to_owned())
    }

    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            PortError::InvalidName(_) => ErrorKind::InvalidInput,
            PortError::NotFound(_) => ErrorKind::NotFound,
            PortError::Network(_) | PortError::UnexpectedResponse(_) | PortError::Internal(_) => {
                ErrorKind::UpstreamFailure
            }
        }
    }
}

/// Returns `true` when `name` cannot possibly identify a city.
#[must_use]
pub fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

#[async_trait]
/// Trait for backends reporting the current weather of a city.
pub trait WeatherPort: Send + Sync {
    /// Fetch the current weather for the named city.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the name is empty, the city is unknown,
    /// or the provider request fails.
    async fn weather(&self, city: &str) -> Result<Weather, PortError>;
}

#[async_trait]
/// Trait for backends describing a city in prose.
pub trait DescriptionPort: Send + Sync {
    /// Fetch a short description of the named city.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the name is empty, no entry matches,
    /// the entry has no text, or the provider request fails.
    async fn description(&self, city: &str) -> Result<String, PortError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_variants() {
        assert_eq!(PortError::empty_name().kind(), ErrorKind::InvalidInput);
        assert_eq!(
            PortError::NotFound("city not found".to_owned()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            PortError::UnexpectedResponse("no pages".to_owned()).kind(),
            ErrorKind::UpstreamFailure
        );
        assert_eq!(
            PortError::Internal("boom".to_owned()).kind(),
            ErrorKind::UpstreamFailure
        );
    }

    #[test]
    fn messages_carry_provider_text() {
        assert_eq!(PortError::empty_name().to_string(), EMPTY_NAME);
        assert_eq!(
            PortError::NotFound("city not found".to_owned()).to_string(),
            "city not found"
        );
    }

    #[test]
    fn blank_names() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(!is_blank("Lisbon"));
    }
}
