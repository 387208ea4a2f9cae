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
use super::cities::path_rejection;
use super::errors::{error_response, service_error_to_response, ApiError};
use crate::models::{Restaurant, RestaurantFilters, RestaurantRequest};

/// Query parameters for listing restaurants
#[derive(Debug, Default, Deserialize)]
pub struct ListRestaurantsQuery {
    pub name: Option<String>,
    pub cuisine: Option<String>,
    pub city_id: Option<Uuid>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
}

impl From<ListRestaurantsQuery> for RestaurantFilters {
    fn from(query: ListRestaurantsQuery) -> Self {
        Self {
            name: query.name,
            cuisine: query.cuisine,
            city_id: query.city_id,
            min_rating: query.min_rating,
            max_rating: query.max_rating,
        }
    }
}

/// List restaurants with optional filters
#[instrument(name = "list_restaurants", skip_all)]
pub async fn list_restaurants(
    State(state): State<ApiState>,
    query: Result<Query<ListRestaurantsQuery>, QueryRejection>,
) -> Result<Json<Vec<Restaurant>>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        error!("Invalid query parameters: {}", rejection);
        error_response(rejection.status(), rejection.body_text())
    })?;

    state
        .restaurant_service
        .list_restaurants(query.into())
        .await
        .map(Json)
        .map_err(service_error_to_response)
}

/// Create a new restaurant; the referenced city must exist
#[instrument(name = "create_restaurant", skip_all)]
pub async fn create_restaurant(
    State(state): State<ApiState>,
    payload: Result<Json<RestaurantRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Restaurant>), ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        error!("Invalid restaurant body: {}", rejection);
        error_response(rejection.status(), rejection.body_text())
    })?;

    match state.restaurant_service.create_restaurant(request).await {
        Ok(restaurant) => {
            info!(restaurant_id = %restaurant.id, "Created restaurant {}", restaurant.name);
            Ok((StatusCode::CREATED, Json(restaurant)))
        }
        Err(err) => {
            error!("Failed to create restaurant: {}", err);
            Err(service_error_to_response(err))
        }
    }
}

/// Get a specific restaurant by id
#[instrument(name = "get_restaurant", skip_all)]
pub async fn get_restaurant(
    State(state): State<ApiState>,
    restaurant_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Restaurant>, ApiError> {
    let Path(restaurant_id) = restaurant_id.map_err(path_rejection)?;

    state
        .restaurant_service
        .get_restaurant(restaurant_id)
        .await
        .map(Json)
        .map_err(service_error_to_response)
}

/// Replace a restaurant wholesale; the city reference is not re-checked
#[instrument(name = "replace_restaurant", skip_all)]
pub async fn replace_restaurant(
    State(state): State<ApiState>,
    restaurant_id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<RestaurantRequest>, JsonRejection>,
) -> Result<Json<Restaurant>, ApiError> {
    let Path(restaurant_id) = restaurant_id.map_err(path_rejection)?;
    let Json(request) = payload.map_err(|rejection| {
        error!("Invalid restaurant body: {}", rejection);
        error_response(rejection.status(), rejection.body_text())
    })?;

    state
        .restaurant_service
        .replace_restaurant(restaurant_id, request)
        .await
        .map(Json)
        .map_err(service_error_to_response)
}

/// Delete a restaurant
#[instrument(name = "delete_restaurant", skip_all)]
pub async fn delete_restaurant(
    State(state): State<ApiState>,
    restaurant_id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(restaurant_id) = restaurant_id.map_err(path_rejection)?;

    state
        .restaurant_service
        .delete_restaurant(restaurant_id)
        .await
        .map(|()| StatusCode::NO_CONTENT)
        .map_err(service_error_to_response)
}
