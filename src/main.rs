use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{error, info};

use city_restaurant_api::{
    create_app, init_observability,
    observability::Metrics,
    repositories::{InMemoryCityRepository, InMemoryRestaurantRepository},
    services::{CityService, RestaurantService},
    shutdown_observability, Config,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration first (basic logging only)
    let config = Config::from_environment()?;
    println!("Configuration loaded successfully");

    init_observability(
        &config.observability.service_name,
        &config.observability.service_version,
        config.observability.otlp_endpoint.as_deref(),
        &config.observability.log_level,
        config.observability.enable_json_logging,
    )?;

    info!("Starting city-restaurant-api service");
    info!(
        "Service: {} v{}",
        config.observability.service_name, config.observability.service_version
    );

    let metrics = Arc::new(Metrics::new()?);
    info!("Metrics initialized successfully");

    let city_repository = Arc::new(InMemoryCityRepository::new());
    let restaurant_repository = Arc::new(InMemoryRestaurantRepository::new());
    info!("In-memory stores initialized successfully");

    let city_service = Arc::new(CityService::new_with_metrics(
        city_repository.clone(),
        metrics.clone(),
    ));
    let restaurant_service = Arc::new(RestaurantService::new_with_metrics(
        restaurant_repository,
        city_repository,
        metrics.clone(),
    ));
    info!("Services initialized successfully");

    let app = create_app(&config.server, metrics, city_service, restaurant_service);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let listener = TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install CTRL+C signal handler: {}", e);
        }
        info!("Shutdown signal received");
        shutdown_observability().await;
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
