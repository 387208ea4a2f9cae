use axum::{extract::DefaultBodyLimit, middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::timeout::TimeoutLayer;

use crate::config::ServerConfig;
use crate::handlers::{
    cors_middleware, create_api_router, health_check, health_check_with_path, metrics_handler,
    request_validation_middleware, root, security_headers_middleware,
};
use crate::observability::{observability_middleware, Metrics};
use crate::services::{CityService, RestaurantService};

/// Assemble the full HTTP application: landing, health, metrics and the CRUD API
pub fn create_app(
    server: &ServerConfig,
    metrics: Arc<Metrics>,
    city_service: Arc<CityService>,
    restaurant_service: Arc<RestaurantService>,
) -> Router {
    let metrics_for_middleware = metrics.clone();

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/health/:path_echo", get(health_check_with_path))
        .route("/metrics", get(metrics_handler))
        .with_state(metrics)
        .merge(create_api_router(city_service, restaurant_service))
        // Each layer wraps the ones added before it: the last added runs first.
        // Outermost: security headers, CORS, content-type check, observability.
        .layer(DefaultBodyLimit::max(server.max_request_size))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(middleware::from_fn(move |req, next| {
            observability_middleware(metrics_for_middleware.clone(), req, next)
        }))
        .layer(middleware::from_fn(request_validation_middleware))
        .layer(middleware::from_fn(cors_middleware))
        .layer(middleware::from_fn(security_headers_middleware))
}
