use axum::{routing::get, Router};
use std::sync::Arc;

use super::{cities, restaurants};
use crate::services::{CityService, RestaurantService};

/// Shared application state containing the entity services
#[derive(Clone)]
pub struct ApiState {
    pub city_service: Arc<CityService>,
    pub restaurant_service: Arc<RestaurantService>,
}

/// Create the city and restaurant CRUD router
pub fn create_api_router<S>(
    city_service: Arc<CityService>,
    restaurant_service: Arc<RestaurantService>,
) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let state = ApiState {
        city_service,
        restaurant_service,
    };

    Router::new()
        .route(
            "/cities",
            get(cities::list_cities).post(cities::create_city),
        )
        .route(
            "/cities/:city_id",
            get(cities::get_city)
                .put(cities::replace_city)
                .delete(cities::delete_city),
        )
        .route(
            "/restaurants",
            get(restaurants::list_restaurants).post(restaurants::create_restaurant),
        )
        .route(
            "/restaurants/:restaurant_id",
            get(restaurants::get_restaurant)
                .put(restaurants::replace_restaurant)
                .delete(restaurants::delete_restaurant),
        )
        .with_state(state)
}
