use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::filters::{matches_exact, matches_range};
use super::Record;

/// A city record as held by the city store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: Uuid,
    pub name: String,
    pub country: String,
    pub population: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating or replacing a city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRequest {
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub population: Option<u64>,
}

/// Filters for listing cities
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CityFilters {
    pub name: Option<String>,
    pub country: Option<String>,
    pub min_population: Option<u64>,
    pub max_population: Option<u64>,
}

impl City {
    /// Create a new City with a generated id and timestamps
    pub fn new(request: CityRequest) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: request.name,
            country: request.country,
            population: request.population,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Record for City {
    type Request = CityRequest;
    type Filters = CityFilters;

    const KIND: &'static str = "city";

    fn id(&self) -> Uuid {
        self.id
    }

    fn matches_filters(&self, filters: &CityFilters) -> bool {
        matches_exact(filters.name.as_deref(), self.name.as_str())
            && matches_exact(filters.country.as_deref(), self.country.as_str())
            && matches_range(filters.min_population, filters.max_population, self.population)
    }

    fn replace(&mut self, request: CityRequest) {
        self.name = request.name;
        self.country = request.country;
        self.population = request.population;
        self.updated_at = Utc::now();
    }
}
