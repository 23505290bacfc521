//! JSON status handler.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use strum::IntoEnumIterator;

use super::super::types::{AppState, StatusResponse};
use crate::error_handling::ErrorType;

/// Request counters since startup.
pub async fn status_handler(State(state): State<AppState>) -> Response {
    let stats = &state.stats;
    let errors: BTreeMap<&'static str, usize> = ErrorType::iter()
        .map(|error_type| (error_type.into(), stats.get_error_count(error_type)))
        .collect();

    let response = StatusResponse {
        uptime_seconds: state.start_time.elapsed().as_secs_f64(),
        total_requests: stats.total_requests(),
        succeeded: stats.succeeded(),
        validation_failures: stats.validation_failures(),
        scrape_failures: stats.total_errors(),
        errors,
    };

    (StatusCode::OK, Json(response)).into_response()
}
