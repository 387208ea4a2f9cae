use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::Repository;
use crate::models::{Record, RepositoryError, RepositoryResult};

/// Process-local store for one entity type.
///
/// All access goes through a single lock that is only held for the map
/// operation itself. Listing scans under the read lock, so a list observes
/// every record atomically but promises no isolation across calls.
pub struct InMemoryStore<T> {
    records: RwLock<IndexMap<Uuid, T>>,
}

impl<T: Record> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(IndexMap::new()),
        }
    }
}

impl<T: Record> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> Repository<T> for InMemoryStore<T> {
    #[instrument(skip_all, fields(kind = T::KIND))]
    async fn find_all(&self, filters: T::Filters) -> RepositoryResult<Vec<T>> {
        let records = self.records.read().await;
        let matching: Vec<T> = records
            .values()
            .filter(|record| record.matches_filters(&filters))
            .cloned()
            .collect();

        debug!(scanned = records.len(), matched = matching.len(), "Store scan complete");
        Ok(matching)
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<T>> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    #[instrument(skip_all, fields(kind = T::KIND, id = %record.id()))]
    async fn create(&self, record: T) -> RepositoryResult<T> {
        let id = record.id();
        let mut records = self.records.write().await;

        if records.contains_key(&id) {
            return Err(RepositoryError::AlreadyExists { id });
        }

        records.insert(id, record.clone());
        debug!("Record stored");
        Ok(record)
    }

    #[instrument(skip_all, fields(kind = T::KIND, id = %id))]
    async fn replace(&self, id: Uuid, request: T::Request) -> RepositoryResult<Option<T>> {
        let mut records = self.records.write().await;

        Ok(records.get_mut(&id).map(|record| {
            record.replace(request);
            debug!("Record replaced");
            record.clone()
        }))
    }

    #[instrument(skip_all, fields(kind = T::KIND, id = %id))]
    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        // shift_remove keeps the remaining records in insertion order
        match self.records.write().await.shift_remove(&id) {
            Some(_) => {
                debug!("Record removed");
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn exists(&self, id: Uuid) -> RepositoryResult<bool> {
        Ok(self.records.read().await.contains_key(&id))
    }

    async fn count(&self) -> RepositoryResult<usize> {
        Ok(self.records.read().await.len())
    }
}
