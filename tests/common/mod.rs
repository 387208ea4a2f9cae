use std::sync::Arc;
use std::time::Duration;

use city_restaurant_api::{
    config::ServerConfig,
    create_app,
    models::{City, CityRequest, Restaurant, RestaurantRequest},
    observability::Metrics,
    repositories::{InMemoryCityRepository, InMemoryRestaurantRepository},
    services::{CityService, RestaurantService},
};
use reqwest::Client;
use tokio::net::TcpListener;
use uuid::Uuid;

pub struct TestEnvironment {
    pub client: Client,
    pub base_url: String,
}

fn server_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 8001,
        request_timeout_seconds: 30,
        max_request_size: 1024 * 1024,
    }
}

impl TestEnvironment {
    /// Serve a fresh application with empty stores on an ephemeral port
    pub async fn new() -> Self {
        let metrics = Arc::new(Metrics::new().expect("Failed to create metrics"));
        let city_repository = Arc::new(InMemoryCityRepository::new());
        let restaurant_repository = Arc::new(InMemoryRestaurantRepository::new());

        let city_service = Arc::new(CityService::new_with_metrics(
            city_repository.clone(),
            metrics.clone(),
        ));
        let restaurant_service = Arc::new(RestaurantService::new_with_metrics(
            restaurant_repository,
            city_repository,
            metrics.clone(),
        ));

        let app = create_app(&server_config(), metrics, city_service, restaurant_service);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to get local address");
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Failed to serve app");
        });

        // Wait for server to start
        tokio::time::sleep(Duration::from_millis(100)).await;

        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn create_city(&self, name: &str, country: &str, population: Option<u64>) -> City {
        let request = CityRequest {
            name: name.to_string(),
            country: country.to_string(),
            population,
        };

        let response = self
            .client
            .post(self.url("/cities"))
            .json(&request)
            .send()
            .await
            .expect("Failed to create city");

        assert_eq!(response.status().as_u16(), 201);
        response.json().await.expect("Failed to parse city")
    }

    pub async fn create_restaurant(
        &self,
        name: &str,
        cuisine: &str,
        city_id: Uuid,
        rating: Option<f64>,
    ) -> Restaurant {
        let request = RestaurantRequest {
            name: name.to_string(),
            cuisine: cuisine.to_string(),
            city_id,
            rating,
        };

        let response = self
            .client
            .post(self.url("/restaurants"))
            .json(&request)
            .send()
            .await
            .expect("Failed to create restaurant");

        assert_eq!(response.status().as_u16(), 201);
        response.json().await.expect("Failed to parse restaurant")
    }
}
