use axum::{http::StatusCode, response::Json};
use serde_json::{json, Value};

use crate::models::{RepositoryError, ServiceError};

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<Value>);

/// Build a JSON error body with a human-readable message
pub fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(json!({
            "error": message.into(),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}

/// Convert ServiceError to HTTP response
pub fn service_error_to_response(err: ServiceError) -> ApiError {
    let status = match &err {
        ServiceError::CityNotFound { .. } | ServiceError::RestaurantNotFound { .. } => {
            StatusCode::NOT_FOUND
        }
        ServiceError::InvalidCityReference { .. } => StatusCode::BAD_REQUEST,
        ServiceError::Repository { source } => match source {
            RepositoryError::NotFound => StatusCode::NOT_FOUND,
            RepositoryError::AlreadyExists { .. } => StatusCode::CONFLICT,
        },
    };

    error_response(status, err.to_string())
}
