use std::sync::Arc;
use std::time::Instant;
use tracing::instrument;
use uuid::Uuid;

use crate::models::{City, CityFilters, CityRequest, RepositoryError, ServiceError, ServiceResult};
use crate::observability::Metrics;
use crate::repositories::Repository;

/// Service for managing cities
pub struct CityService {
    repository: Arc<dyn Repository<City>>,
    metrics: Option<Arc<Metrics>>,
}

impl CityService {
    /// Create a new CityService
    pub fn new(repository: Arc<dyn Repository<City>>) -> Self {
        Self {
            repository,
            metrics: None,
        }
    }

    /// Create a new CityService that records store metrics
    pub fn new_with_metrics(repository: Arc<dyn Repository<City>>, metrics: Arc<Metrics>) -> Self {
        Self {
            repository,
            metrics: Some(metrics),
        }
    }

    /// List cities matching every supplied filter
    #[instrument(skip(self), fields(filters = ?filters))]
    pub async fn list_cities(&self, filters: CityFilters) -> ServiceResult<Vec<City>> {
        let start = Instant::now();
        let result = self.repository.find_all(filters).await;
        self.record("list", result.is_ok(), start).await;

        let cities = result?;
        crate::info_with_trace!("Found {} cities matching criteria", cities.len());
        Ok(cities)
    }

    /// Get a specific city by id
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_city(&self, id: Uuid) -> ServiceResult<City> {
        let start = Instant::now();
        let result = self.repository.find_by_id(id).await;
        self.record("get", matches!(result, Ok(Some(_))), start).await;

        match result? {
            Some(city) => Ok(city),
            None => {
                crate::warn_with_trace!("City not found");
                Err(ServiceError::CityNotFound { id })
            }
        }
    }

    /// Create a new city with a generated id
    #[instrument(skip(self, request), fields(name = %request.name, country = %request.country))]
    pub async fn create_city(&self, request: CityRequest) -> ServiceResult<City> {
        let start = Instant::now();
        let result = self.repository.create(City::new(request)).await;
        self.record("create", result.is_ok(), start).await;

        let city = result?;
        crate::info_with_trace!(city_id = %city.id, "City created");
        Ok(city)
    }

    /// Replace every mutable field of an existing city
    #[instrument(skip(self, request), fields(id = %id))]
    pub async fn replace_city(&self, id: Uuid, request: CityRequest) -> ServiceResult<City> {
        let start = Instant::now();
        let result = self.repository.replace(id, request).await;
        self.record("replace", matches!(result, Ok(Some(_))), start).await;

        match result? {
            Some(city) => {
                crate::info_with_trace!("City replaced");
                Ok(city)
            }
            None => {
                crate::warn_with_trace!("City not found for replace");
                Err(ServiceError::CityNotFound { id })
            }
        }
    }

    /// Delete a city. Restaurants referencing it are left untouched.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_city(&self, id: Uuid) -> ServiceResult<()> {
        let start = Instant::now();
        let result = self.repository.delete(id).await;
        self.record("delete", result.is_ok(), start).await;

        match result {
            Ok(()) => {
                crate::info_with_trace!("City deleted");
                Ok(())
            }
            Err(RepositoryError::NotFound) => {
                crate::warn_with_trace!("City not found for delete");
                Err(ServiceError::CityNotFound { id })
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn record(&self, operation: &str, success: bool, start: Instant) {
        if let Some(metrics) = &self.metrics {
            metrics.record_store_operation("city", operation, success, start.elapsed().as_secs_f64());
            if let Ok(count) = self.repository.count().await {
                metrics.set_store_records("city", count);
            }
        }
    }
}
