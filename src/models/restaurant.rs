use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::filters::{matches_exact, matches_range};
use super::Record;

/// A restaurant record. `city_id` is a weak reference: it named an existing
/// city when the restaurant was created and is not maintained afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub cuisine: String,
    pub city_id: Uuid,
    pub rating: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating or replacing a restaurant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRequest {
    pub name: String,
    pub cuisine: String,
    pub city_id: Uuid,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Filters for listing restaurants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestaurantFilters {
    pub name: Option<String>,
    pub cuisine: Option<String>,
    pub city_id: Option<Uuid>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
}

impl Restaurant {
    /// Create a new Restaurant with a generated id and timestamps
    pub fn new(request: RestaurantRequest) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: request.name,
            cuisine: request.cuisine,
            city_id: request.city_id,
            rating: request.rating,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Record for Restaurant {
    type Request = RestaurantRequest;
    type Filters = RestaurantFilters;

    const KIND: &'static str = "restaurant";

    fn id(&self) -> Uuid {
        self.id
    }

    fn matches_filters(&self, filters: &RestaurantFilters) -> bool {
        matches_exact(filters.name.as_deref(), self.name.as_str())
            && matches_exact(filters.cuisine.as_deref(), self.cuisine.as_str())
            && matches_exact(filters.city_id.as_ref(), &self.city_id)
            && matches_range(filters.min_rating, filters.max_rating, self.rating)
    }

    fn replace(&mut self, request: RestaurantRequest) {
        self.name = request.name;
        self.cuisine = request.cuisine;
        self.city_id = request.city_id;
        self.rating = request.rating;
        self.updated_at = Utc::now();
    }
}
