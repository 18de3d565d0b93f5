//! Providers that answer from memory and count how often they were asked.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::model::Weather;
use crate::ports::{DescriptionPort, ErrorKind, PortError, WeatherPort};

/// Canned answer of a stub provider.
#[derive(Debug, Clone)]
enum Answer<T> {
    Value(T),
    Failure(ErrorKind, String),
}

impl<T: Clone> Answer<T> {
    fn resolve(&self) -> Result<T, PortError> {
        match self {
            Answer::Value(value) => Ok(value.clone()),
            Answer::Failure(kind, message) => Err(port_error(*kind, message)),
        }
    }
}

fn port_error(kind: ErrorKind, message: &str) -> PortError {
    match kind {
        ErrorKind::InvalidInput => PortError::InvalidName(message.to_owned()),
        ErrorKind::NotFound => PortError::NotFound(message.to_owned()),
        ErrorKind::UpstreamFailure => PortError::Internal(message.to_owned()),
    }
}

/// Weather provider returning the same answer for every city.
#[derive(Debug)]
pub struct StubWeather {
    answer: Answer<Weather>,
    calls: AtomicUsize,
}

impl StubWeather {
    /// Always report `weather`.
    #[must_use]
    pub fn ok(weather: Weather) -> Self {
        Self::answering(Answer::Value(weather))
    }

    /// Always fail with an upstream failure carrying `message`.
    #[must_use]
    pub fn failing<S: Into<String>>(message: S) -> Self {
        Self::failing_with(ErrorKind::UpstreamFailure, message)
    }

    /// Always fail with an error of the given kind carrying `message`.
    #[must_use]
    pub fn failing_with<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self::answering(Answer::Failure(kind, message.into()))
    }

    fn answering(answer: Answer<Weather>) -> Self {
        Self {
            answer,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of lookups served so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherPort for StubWeather {
    async fn weather(&self, _city: &str) -> Result<Weather, PortError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.resolve()
    }
}

/// Description provider returning the same answer for every city.
#[derive(Debug)]
pub struct StubDescription {
    answer: Answer<String>,
    calls: AtomicUsize,
}

impl StubDescription {
    /// Always report `description`.
    #[must_use]
    pub fn ok<S: Into<String>>(description: S) -> Self {
        Self::answering(Answer::Value(description.into()))
    }

    /// Always fail with an upstream failure carrying `message`.
    #[must_use]
    pub fn failing<S: Into<String>>(message: S) -> Self {
        Self::failing_with(ErrorKind::UpstreamFailure, message)
    }

    /// Always fail with an error of the given kind carrying `message`.
    #[must_use]
    pub fn failing_with<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self::answering(Answer::Failure(kind, message.into()))
    }

    fn answering(answer: Answer<String>) -> Self {
        Self {
            answer,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of lookups served so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DescriptionPort for StubDescription {
    async fn description(&self, _city: &str) -> Result<String, PortError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.resolve()
    }
}
