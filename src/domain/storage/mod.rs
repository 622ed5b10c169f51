//! Persistence gateway abstraction over keyed records

pub mod entity;
pub mod gateway;

pub use entity::{StorageEntity, StorageKey};
pub use gateway::Storage;
