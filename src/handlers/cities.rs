use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use tracing::{error, info, instrument};
use uuid::Uuid;

use super::api::ApiState;
use super::errors::{error_response, service_error_to_response, ApiError};
use crate::models::{City, CityFilters, CityRequest};

/// Query parameters for listing cities
#[derive(Debug, Default, Deserialize)]
pub struct ListCitiesQuery {
    pub name: Option<String>,
    pub country: Option<String>,
    pub min_population: Option<u64>,
    pub max_population: Option<u64>,
}

impl From<ListCitiesQuery> for CityFilters {
    fn from(query: ListCitiesQuery) -> Self {
        Self {
            name: query.name,
            country: query.country,
            min_population: query.min_population,
            max_population: query.max_population,
        }
    }
}

/// List cities with optional filters
#[instrument(name = "list_cities", skip_all)]
pub async fn list_cities(
    State(state): State<ApiState>,
    query: Result<Query<ListCitiesQuery>, QueryRejection>,
) -> Result<Json<Vec<City>>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        error!("Invalid query parameters: {}", rejection);
        error_response(rejection.status(), rejection.body_text())
    })?;

    state
        .city_service
        .list_cities(query.into())
        .await
        .map(Json)
        .map_err(service_error_to_response)
}

/// Create a new city
#[instrument(name = "create_city", skip_all)]
pub async fn create_city(
    State(state): State<ApiState>,
    payload: Result<Json<CityRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<City>), ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        error!("Invalid city body: {}", rejection);
        error_response(rejection.status(), rejection.body_text())
    })?;

    match state.city_service.create_city(request).await {
        Ok(city) => {
            info!(city_id = %city.id, "Created city {}", city.name);
            Ok((StatusCode::CREATED, Json(city)))
        }
        Err(err) => {
            error!("Failed to create city: {}", err);
            Err(service_error_to_response(err))
        }
    }
}

/// Get a specific city by id
#[instrument(name = "get_city", skip_all)]
pub async fn get_city(
    State(state): State<ApiState>,
    city_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<City>, ApiError> {
    let Path(city_id) = city_id.map_err(path_rejection)?;

    state
        .city_service
        .get_city(city_id)
        .await
        .map(Json)
        .map_err(service_error_to_response)
}

/// Replace a city wholesale; the id in the path is authoritative
#[instrument(name = "replace_city", skip_all)]
pub async fn replace_city(
    State(state): State<ApiState>,
    city_id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<CityRequest>, JsonRejection>,
) -> Result<Json<City>, ApiError> {
    let Path(city_id) = city_id.map_err(path_rejection)?;
    let Json(request) = payload.map_err(|rejection| {
        error!("Invalid city body: {}", rejection);
        error_response(rejection.status(), rejection.body_text())
    })?;

    state
        .city_service
        .replace_city(city_id, request)
        .await
        .map(Json)
        .map_err(service_error_to_response)
}

/// Delete a city
#[instrument(name = "delete_city", skip_all)]
pub async fn delete_city(
    State(state): State<ApiState>,
    city_id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(city_id) = city_id.map_err(path_rejection)?;

    state
        .city_service
        .delete_city(city_id)
        .await
        .map(|()| StatusCode::NO_CONTENT)
        .map_err(service_error_to_response)
}

pub(super) fn path_rejection(rejection: PathRejection) -> ApiError {
    error!("Invalid path parameter: {}", rejection);
    error_response(rejection.status(), rejection.body_text())
}
