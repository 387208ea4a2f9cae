use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{City, Record, RepositoryResult, Restaurant};

pub mod memory;

pub use memory::InMemoryStore;


/// Trait defining the interface for store access operations on one entity type
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// Find all records matching every supplied filter, in insertion order
    async fn find_all(&self, filters: T::Filters) -> RepositoryResult<Vec<T>>;

    /// Find a record by its id
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<T>>;

    /// Store a new record
    async fn create(&self, record: T) -> RepositoryResult<T>;

    /// Replace the mutable fields of an existing record, returning `None` if absent
    async fn replace(&self, id: Uuid, request: T::Request) -> RepositoryResult<Option<T>>;

    /// Remove a record
    async fn delete(&self, id: Uuid) -> RepositoryResult<()>;

    /// Check if a record exists
    async fn exists(&self, id: Uuid) -> RepositoryResult<bool>;

    /// Count stored records
    async fn count(&self) -> RepositoryResult<usize>;
}

/// In-memory city store
pub type InMemoryCityRepository = InMemoryStore<City>;

/// In-memory restaurant store
pub type InMemoryRestaurantRepository = InMemoryStore<Restaurant>;
