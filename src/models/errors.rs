use thiserror::Error;
use uuid::Uuid;

/// Service-level errors that can occur in business logic
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("City not found: {id}")]
    CityNotFound { id: Uuid },

    #[error("Restaurant not found: {id}")]
    RestaurantNotFound { id: Uuid },

    #[error("City does not exist: {city_id}")]
    InvalidCityReference { city_id: Uuid },

    #[error("Repository error: {source}")]
    Repository {
        #[from]
        source: RepositoryError,
    },
}

/// Repository-level errors for store operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Item not found")]
    NotFound,

    #[error("Item already exists: {id}")]
    AlreadyExists { id: Uuid },
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;
