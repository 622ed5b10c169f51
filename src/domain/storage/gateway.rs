//! Persistence gateway trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

use super::entity::StorageEntity;

/// Generic gateway for CRUD operations on one record kind.
///
/// Every operation is independently atomic at the single-record level; there
/// are no transactions spanning multiple records.
#[async_trait]
pub trait Storage<E>: Send + Sync + Debug
where
    E: StorageEntity + 'static,
{
    /// Retrieves a record by its key
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError>;

    /// Retrieves all records of this kind
    async fn list(&self) -> Result<Vec<E>, DomainError>;

    /// Inserts a new record, fails with `Conflict` if the key already exists
    async fn create(&self, entity: E) -> Result<E, DomainError>;

    /// Updates an existing record, fails with `NotFound` if the key is absent
    async fn update(&self, entity: E) -> Result<E, DomainError>;

    /// Upserts a record keyed on its key, converging to the given value
    async fn save(&self, entity: E) -> Result<E, DomainError> {
        if self.exists(entity.key()).await? {
            self.update(entity).await
        } else {
            self.create(entity).await
        }
    }

    /// Deletes a record by its key, returns true if a record was removed
    async fn delete(&self, key: &E::Key) -> Result<bool, DomainError>;

    /// Checks whether a record exists
    async fn exists(&self, key: &E::Key) -> Result<bool, DomainError> {
        Ok(self.get(key).await?.is_some())
    }

    /// Returns the number of records of this kind
    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.list().await?.len())
    }

    /// Removes all records of this kind
    async fn clear(&self) -> Result<(), DomainError>;
}
