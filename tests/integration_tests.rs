#![allow(clippy::needless_borrows_for_generic_args)]

use city_restaurant_api::models::{City, CityRequest, Restaurant, RestaurantRequest};
use serde_json::{json, Value};
use uuid::Uuid;

mod common;
use common::*;

#[tokio::test]
async fn test_city_and_restaurant_scenario() {
    let test_env = TestEnvironment::new().await;
    let client = &test_env.client;

    let paris = test_env
        .create_city("Paris", "France", Some(2_148_000))
        .await;
    test_env.create_city("Berlin", "Germany", Some(3_645_000)).await;

    let response = client
        .get(test_env.url("/cities?country=France"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 200);
    let cities: Vec<City> = response.json().await.expect("Failed to parse response");
    assert_eq!(cities, vec![paris.clone()]);

    let restaurant = test_env
        .create_restaurant("Le Jules Verne", "French", paris.id, Some(4.6))
        .await;
    test_env
        .create_restaurant("Chez Nobody", "French", paris.id, Some(2.1))
        .await;

    let response = client
        .get(test_env.url(&format!(
            "/restaurants?city_id={}&min_rating=4.0",
            paris.id
        )))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 200);
    let restaurants: Vec<Restaurant> = response.json().await.expect("Failed to parse response");
    assert_eq!(restaurants, vec![restaurant.clone()]);

    let response = client
        .delete(test_env.url(&format!("/cities/{}", paris.id)))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 204);

    let response = client
        .get(test_env.url(&format!("/cities/{}", paris.id)))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 404);

    // Restaurants referencing a deleted city remain readable
    let response = client
        .get(test_env.url(&format!("/restaurants/{}", restaurant.id)))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 200);
    let fetched: Restaurant = response.json().await.expect("Failed to parse response");
    assert_eq!(fetched.city_id, paris.id);
}

#[tokio::test]
async fn test_city_replace_keeps_identity() {
    let test_env = TestEnvironment::new().await;
    let client = &test_env.client;

    let lyon = test_env.create_city("Lyon", "France", None).await;

    let replacement = CityRequest {
        name: "Lyon".to_string(),
        country: "France".to_string(),
        population: Some(522_000),
    };
    let response = client
        .put(test_env.url(&format!("/cities/{}", lyon.id)))
        .json(&replacement)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 200);

    let replaced: City = response.json().await.expect("Failed to parse response");
    assert_eq!(replaced.id, lyon.id);
    assert_eq!(replaced.created_at, lyon.created_at);
    assert_eq!(replaced.population, Some(522_000));

    let response = client
        .put(test_env.url(&format!("/cities/{}", Uuid::new_v4())))
        .json(&replacement)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn test_restaurant_requires_existing_city() {
    let test_env = TestEnvironment::new().await;
    let client = &test_env.client;

    let missing_city = Uuid::new_v4();
    let request = RestaurantRequest {
        name: "Nowhere Diner".to_string(),
        cuisine: "American".to_string(),
        city_id: missing_city,
        rating: None,
    };

    let response = client
        .post(test_env.url("/restaurants"))
        .json(&request)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["error"],
        format!("City does not exist: {}", missing_city)
    );
    assert!(body["timestamp"].is_string());

    let response = client
        .get(test_env.url("/restaurants"))
        .send()
        .await
        .expect("Failed to send request");
    let restaurants: Vec<Restaurant> = response.json().await.expect("Failed to parse response");
    assert!(restaurants.is_empty());
}

#[tokio::test]
async fn test_restaurant_lifecycle() {
    let test_env = TestEnvironment::new().await;
    let client = &test_env.client;

    let tokyo = test_env.create_city("Tokyo", "Japan", Some(13_960_000)).await;
    let sushi = test_env
        .create_restaurant("Sukiyabashi", "Japanese", tokyo.id, Some(4.9))
        .await;

    let response = client
        .put(test_env.url(&format!("/restaurants/{}", sushi.id)))
        .json(&json!({
            "name": "Sukiyabashi Jiro",
            "cuisine": "Japanese",
            "city_id": tokyo.id,
            "rating": 5.0
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 200);
    let replaced: Restaurant = response.json().await.expect("Failed to parse response");
    assert_eq!(replaced.id, sushi.id);
    assert_eq!(replaced.name, "Sukiyabashi Jiro");

    let response = client
        .delete(test_env.url(&format!("/restaurants/{}", sushi.id)))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 204);

    let response = client
        .delete(test_env.url(&format!("/restaurants/{}", sushi.id)))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn test_invalid_requests_rejected() {
    let test_env = TestEnvironment::new().await;
    let client = &test_env.client;

    // Missing required field
    let response = client
        .post(test_env.url("/cities"))
        .json(&json!({ "name": "Rome" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 422);

    // Malformed id in path
    let response = client
        .get(test_env.url("/cities/not-a-uuid"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 400);

    // Non-numeric range filter
    let response = client
        .get(test_env.url("/cities?min_population=lots"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn test_health_echo() {
    let test_env = TestEnvironment::new().await;
    let client = &test_env.client;

    let response = client
        .get(test_env.url("/health/ping?echo=pong"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], 200);
    assert_eq!(body["status_message"], "OK");
    assert_eq!(body["echo"], "pong");
    assert_eq!(body["path_echo"], "ping");
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let test_env = TestEnvironment::new().await;
    let client = &test_env.client;

    test_env.create_city("Madrid", "Spain", None).await;

    let response = client
        .get(test_env.url("/metrics"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 200);

    let text = response.text().await.expect("Failed to read metrics");
    assert!(text.contains("http_requests_total"));
    assert!(text.contains(r#"store_records{store="city"} 1"#));
}

#[tokio::test]
async fn test_nan_rating_bound_matches_nothing() {
    let test_env = TestEnvironment::new().await;
    let client = &test_env.client;

    let oslo = test_env.create_city("Oslo", "Norway", None).await;
    test_env
        .create_restaurant("Maaemo", "Nordic", oslo.id, Some(1.0))
        .await;

    for query in ["min_rating=NaN", "max_rating=NaN"] {
        let response = client
            .get(test_env.url(&format!("/restaurants?{}", query)))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status().as_u16(), 200);

        let restaurants: Vec<Restaurant> =
            response.json().await.expect("Failed to parse response");
        assert!(restaurants.is_empty(), "{} matched {:?}", query, restaurants);
    }
}
