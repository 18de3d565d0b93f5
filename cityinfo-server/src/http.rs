//! Routes mapping city-info lookups onto JSON responses.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};

use cityinfo_core::{ports::ErrorKind, service::CityInfoService};

const MISSING_NAME: &str = "missing required name query parameter";

/// Body of every non-success response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable failure message.
    pub error: String,
}

/// Build the router serving `GET /city-info?name=<city>`.
pub fn router(service: Arc<CityInfoService>) -> Router {
    Router::new()
        .route("/city-info", get(city_info))
        .with_state(service)
}

async fn city_info(
    State(service): State<Arc<CityInfoService>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let Query(params) = match query {
        Ok(params) => params,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    // Repeated `name` parameters: the first one wins.
    let Some(name) = first_name(params) else {
        return error_response(StatusCode::BAD_REQUEST, MISSING_NAME.to_owned());
    };

    tracing::debug!(city = %name, "city info requested");

    match service.current_status(&name).await {
        Ok(info) => (StatusCode::OK, Json(info)).into_response(),
        Err(err) => error_response(status_for(err.kind()), err.to_string()),
    }
}

fn first_name(params: Vec<(String, String)>) -> Option<String> {
    params
        .into_iter()
        .find(|(key, _)| key == "name")
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::UpstreamFailure => StatusCode::BAD_GATEWAY,
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}
