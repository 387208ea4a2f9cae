use std::sync::Arc;
use std::time::Instant;
use tracing::instrument;
use uuid::Uuid;

use crate::models::{
    City, RepositoryError, Restaurant, RestaurantFilters, RestaurantRequest, ServiceError,
    ServiceResult,
};
use crate::observability::Metrics;
use crate::repositories::Repository;

/// Service for managing restaurants.
///
/// Holds a handle to the city store so that creation can verify the city
/// reference. The check is point-in-time: nothing keeps it valid afterwards.
pub struct RestaurantService {
    repository: Arc<dyn Repository<Restaurant>>,
    city_repository: Arc<dyn Repository<City>>,
    metrics: Option<Arc<Metrics>>,
}

impl RestaurantService {
    /// Create a new RestaurantService
    pub fn new(
        repository: Arc<dyn Repository<Restaurant>>,
        city_repository: Arc<dyn Repository<City>>,
    ) -> Self {
        Self {
            repository,
            city_repository,
            metrics: None,
        }
    }

    /// Create a new RestaurantService that records store metrics
    pub fn new_with_metrics(
        repository: Arc<dyn Repository<Restaurant>>,
        city_repository: Arc<dyn Repository<City>>,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self {
            repository,
            city_repository,
            metrics: Some(metrics),
        }
    }

    /// List restaurants matching every supplied filter
    #[instrument(skip(self), fields(filters = ?filters))]
    pub async fn list_restaurants(
        &self,
        filters: RestaurantFilters,
    ) -> ServiceResult<Vec<Restaurant>> {
        let start = Instant::now();
        let result = self.repository.find_all(filters).await;
        self.record("list", result.is_ok(), start).await;

        let restaurants = result?;
        crate::info_with_trace!("Found {} restaurants matching criteria", restaurants.len());
        Ok(restaurants)
    }

    /// Get a specific restaurant by id
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_restaurant(&self, id: Uuid) -> ServiceResult<Restaurant> {
        let start = Instant::now();
        let result = self.repository.find_by_id(id).await;
        self.record("get", matches!(result, Ok(Some(_))), start).await;

        match result? {
            Some(restaurant) => Ok(restaurant),
            None => {
                crate::warn_with_trace!("Restaurant not found");
                Err(ServiceError::RestaurantNotFound { id })
            }
        }
    }

    /// Create a new restaurant. Fails with `InvalidCityReference` and stores
    /// nothing when `city_id` does not name an existing city.
    #[instrument(skip(self, request), fields(name = %request.name, city_id = %request.city_id))]
    pub async fn create_restaurant(&self, request: RestaurantRequest) -> ServiceResult<Restaurant> {
        let start = Instant::now();

        if !self.city_repository.exists(request.city_id).await? {
            self.record("create", false, start).await;
            crate::warn_with_trace!("Rejected restaurant with unknown city reference");
            return Err(ServiceError::InvalidCityReference {
                city_id: request.city_id,
            });
        }

        let result = self.repository.create(Restaurant::new(request)).await;
        self.record("create", result.is_ok(), start).await;

        let restaurant = result?;
        crate::info_with_trace!(restaurant_id = %restaurant.id, "Restaurant created");
        Ok(restaurant)
    }

    /// Replace every mutable field of an existing restaurant.
    ///
    /// Unlike create, the (possibly new) `city_id` is not checked against the
    /// city store.
    #[instrument(skip(self, request), fields(id = %id, city_id = %request.city_id))]
    pub async fn replace_restaurant(
        &self,
        id: Uuid,
        request: RestaurantRequest,
    ) -> ServiceResult<Restaurant> {
        let start = Instant::now();
        let result = self.repository.replace(id, request).await;
        self.record("replace", matches!(result, Ok(Some(_))), start).await;

        match result? {
            Some(restaurant) => {
                crate::info_with_trace!("Restaurant replaced");
                Ok(restaurant)
            }
            None => {
                crate::warn_with_trace!("Restaurant not found for replace");
                Err(ServiceError::RestaurantNotFound { id })
            }
        }
    }

    /// Delete a restaurant
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_restaurant(&self, id: Uuid) -> ServiceResult<()> {
        let start = Instant::now();
        let result = self.repository.delete(id).await;
        self.record("delete", result.is_ok(), start).await;

        match result {
            Ok(()) => {
                crate::info_with_trace!("Restaurant deleted");
                Ok(())
            }
            Err(RepositoryError::NotFound) => {
                crate::warn_with_trace!("Restaurant not found for delete");
                Err(ServiceError::RestaurantNotFound { id })
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn record(&self, operation: &str, success: bool, start: Instant) {
        if let Some(metrics) = &self.metrics {
            metrics.record_store_operation(
                "restaurant",
                operation,
                success,
                start.elapsed().as_secs_f64(),
            );
            if let Ok(count) = self.repository.count().await {
                metrics.set_store_records("restaurant", count);
            }
        }
    }
}
