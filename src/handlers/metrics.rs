use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::error;

use super::errors::{error_response, ApiError};
use crate::observability::Metrics;

const PROMETHEUS_TEXT: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Prometheus text exposition of the HTTP and store metrics
pub async fn metrics_handler(
    State(metrics): State<Arc<Metrics>>,
) -> Result<impl IntoResponse, ApiError> {
    let body = metrics.encode().map_err(|e| {
        error!(error = %e, "Failed to encode metrics");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok(([(header::CONTENT_TYPE, PROMETHEUS_TEXT)], body))
}
