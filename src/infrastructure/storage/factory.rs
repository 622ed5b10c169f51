//! Factory for runtime storage backend selection

use std::sync::Arc;

use sqlx::postgres::PgPool;

use crate::domain::DomainError;
use crate::domain::storage::{Storage, StorageEntity};

use super::in_memory::InMemoryStorage;
use super::postgres::PostgresStorage;

/// Supported storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for development/tests)
    InMemory,
    /// PostgreSQL document tables
    Postgres,
}

impl StorageType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

/// Factory for creating gateway instances per record kind
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    pub fn create_in_memory<E>() -> Arc<dyn Storage<E>>
    where
        E: StorageEntity + 'static,
    {
        Arc::new(InMemoryStorage::<E>::new())
    }

    /// Creates a PostgreSQL-backed store sharing an existing pool
    pub async fn create_postgres_with_pool<E>(
        pool: PgPool,
        table_name: &str,
    ) -> Result<Arc<dyn Storage<E>>, DomainError>
    where
        E: StorageEntity + 'static,
    {
        let storage = PostgresStorage::<E>::new(pool, table_name);
        storage.ensure_table().await?;
        Ok(Arc::new(storage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{User, Username};

    #[test]
    fn test_storage_type_parse() {
        assert_eq!(StorageType::parse("memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::parse("in-memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::parse("postgres"), Some(StorageType::Postgres));
        assert_eq!(StorageType::parse("pg"), Some(StorageType::Postgres));
        assert_eq!(StorageType::parse("unknown"), None);
    }

    #[tokio::test]
    async fn test_create_in_memory() {
        let storage = StorageFactory::create_in_memory::<User>();

        storage
            .create(User::new(Username::new("alice").unwrap(), "secret"))
            .await
            .unwrap();

        assert_eq!(storage.count().await.unwrap(), 1);
    }
}
