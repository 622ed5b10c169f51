//! Gateway implementations

pub mod factory;
pub mod in_memory;
pub mod postgres;

pub use factory::{StorageFactory, StorageType};
pub use in_memory::InMemoryStorage;
pub use postgres::PostgresStorage;
