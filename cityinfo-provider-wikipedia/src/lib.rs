//! Description provider backed by the `MediaWiki` extracts API of Wikipedia.

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use cityinfo_core::ports::{DescriptionPort, PortError, is_blank};

/// English Wikipedia API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org/w/api.php";

const EMPTY_RESPONSE: &str = "empty response from wikipedia api";

/// Response wrapper from `action=query`.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    query: Option<Query>,
}

#[derive(Debug, Deserialize)]
struct Query {
    #[serde(default)]
    pages: BTreeMap<String, Page>,
}

/// Single page; missing articles come back with a negative id and no extract.
#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    extract: String,
}

impl QueryResponse {
    // Only the first page is of interest.
    fn into_extract(self) -> Result<String, PortError> {
        let query = self.query.ok_or_else(|| {
            PortError::UnexpectedResponse("wikipedia api response has no query block".to_owned())
        })?;
        let page = query
            .pages
            .into_values()
            .next()
            .ok_or_else(|| PortError::NotFound(EMPTY_RESPONSE.to_owned()))?;

        if page.extract.trim().is_empty() {
            return Err(PortError::NotFound(EMPTY_RESPONSE.to_owned()));
        }

        Ok(page.extract)
    }
}

/// Description lookups against Wikipedia.
pub struct WikipediaPort {
    client: Client,
    base_url: String,
}

impl WikipediaPort {
    /// Create a new port bound to the given HTTP client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    /// Point the port at a different `api.php` endpoint (other languages, tests).
    #[must_use]
    pub fn with_base_url<U: Into<String>>(mut self, base_url: U) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl DescriptionPort for WikipediaPort {
    async fn description(&self, city: &str) -> Result<String, PortError> {
        if is_blank(city) {
            return Err(PortError::empty_name());
        }

        tracing::debug!(city, "requesting wikipedia extract");

        // Plain-text first sentence of the intro section, following redirects.
        let req = self.client.get(&self.base_url).query(&[
            ("action", "query"),
            ("prop", "extracts"),
            ("exsentences", "1"),
            ("exintro", "1"),
            ("explaintext", "1"),
            ("redirects", "1"),
            ("format", "json"),
            ("titles", city),
        ]);

        fetch_json::<QueryResponse>(req).await?.into_extract()
    }
}

// Small helper to fetch and decode JSON with status handling.
async fn fetch_json<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, PortError> {
    req.send()
        .await
        .map_err(PortError::from)?
        .error_for_status()
        .map_err(PortError::from)?
        .json()
        .await
        .map_err(PortError::from)
}
