//! Weather provider backed by the `OpenWeatherMap` current weather API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use cityinfo_core::{
    model::Weather,
    ports::{PortError, WeatherPort, is_blank},
};

/// Public `OpenWeatherMap` API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Response from /weather, reduced to the fields we read.
#[derive(Debug, Deserialize)]
struct WeatherResponse {
    main: MainBlock,

    #[serde(default)]
    weather: Vec<Condition>,
}

/// Measurements block; `units=metric` makes `temp` degrees Celsius.
#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
}

/// Single weather condition, e.g. `{"main": "Rain", "description": "light rain"}`.
#[derive(Debug, Deserialize)]
struct Condition {
    #[serde(default)]
    description: String,
}

impl WeatherResponse {
    // Only the first condition is reported.
    fn into_weather(self) -> Weather {
        let summary = self
            .weather
            .into_iter()
            .next()
            .map(|condition| condition.description)
            .unwrap_or_default();

        Weather::new(self.main.temp, summary)
    }
}

/// Weather lookups against `OpenWeatherMap`.
pub struct OpenWeatherPort {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherPort {
    /// Create a new port bound to the given HTTP client and API key.
    #[must_use]
    pub fn new<K: Into<String>>(client: Client, api_key: K) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: api_key.into(),
        }
    }

    /// Point the port at a different API root (mirrors, tests).
    #[must_use]
    pub fn with_base_url<U: Into<String>>(mut self, base_url: U) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }
}

#[async_trait]
impl WeatherPort for OpenWeatherPort {
    async fn weather(&self, city: &str) -> Result<Weather, PortError> {
        if is_blank(city) {
            return Err(PortError::empty_name());
        }

        tracing::debug!(city, "requesting current weather");

        // The query string carries the API key, so errors are stripped of their URL.
        let resp = self
            .client
            .get(format!("{}/weather", self.base_url))
            .query(&[
                ("q", city),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|err| PortError::from(err.without_url()))?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(PortError::NotFound("city not found".to_owned()));
        }

        let payload = resp
            .error_for_status()
            .map_err(|err| PortError::from(err.without_url()))?
            .json::<WeatherResponse>()
            .await
            .map_err(|err| PortError::from(err.without_url()))?;

        Ok(payload.into_weather())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use cityinfo_core::ports::{EMPTY_NAME, ErrorKind};

    use super::*;

    const SAMPLE: &str = r#"{
        "coord": {"lon": -9.1333, "lat": 38.7167},
        "weather": [
            {"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"},
            {"id": 701, "main": "Mist", "description": "mist", "icon": "50d"}
        ],
        "base": "stations",
        "main": {"temp": 17.84, "feels_like": 17.6, "temp_min": 16.9, "temp_max": 18.9, "pressure": 1016, "humidity": 77},
        "visibility": 10000,
        "wind": {"speed": 5.66, "deg": 330},
        "name": "Lisbon",
        "cod": 200
    }"#;

    #[test]
    fn decodes_temperature_and_first_condition() {
        let payload: WeatherResponse = serde_json::from_str(SAMPLE).expect("decode sample");

        let weather = payload.into_weather();

        assert!((weather.temperature - 17.84).abs() < f64::EPSILON);
        assert_eq!(weather.summary, "light rain");
    }

    #[test]
    fn missing_conditions_give_empty_summary() {
        let payload: WeatherResponse =
            serde_json::from_str(r#"{"main": {"temp": 3.0}}"#).expect("decode payload");

        assert_eq!(payload.into_weather().summary, "");
    }

    #[test]
    fn payload_without_main_block_is_rejected() {
        let decoded = serde_json::from_str::<WeatherResponse>(r#"{"weather": []}"#);

        assert!(decoded.is_err());
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let port = OpenWeatherPort::new(Client::new(), "key").with_base_url("http://localhost:1234/");

        assert_eq!(port.base_url, "http://localhost:1234");
    }

    #[tokio::test]
    async fn empty_name_is_rejected_without_a_request() {
        let port = OpenWeatherPort::new(Client::new(), "key").with_base_url("http://127.0.0.1:9");

        let err = port.weather("  ").await.expect_err("empty name");

        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), EMPTY_NAME);
    }

    #[tokio::test]
    async fn transport_errors_do_not_leak_the_api_key() {
        let client = Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .expect("build client");
        let port = OpenWeatherPort::new(client, "super-secret-key").with_base_url("http://127.0.0.1:9");

        let err = port.weather("Lisbon").await.expect_err("nothing listens there");

        assert_eq!(err.kind(), ErrorKind::UpstreamFailure);
        assert!(!err.to_string().contains("super-secret-key"));
    }
}
