//! Traits for records the persistence gateway can hold

use std::fmt::Debug;

use serde::{Serialize, de::DeserializeOwned};

/// Trait for types usable as record keys
pub trait StorageKey: Clone + Debug + Send + Sync + Eq + std::hash::Hash {
    /// Returns the key as a string for backends that store string keys
    fn as_str(&self) -> &str;
}

/// Trait for record kinds the gateway persists
pub trait StorageEntity: Clone + Debug + Send + Sync + Serialize + DeserializeOwned {
    /// The key type for this record kind
    type Key: StorageKey;

    /// Returns the record's key
    fn key(&self) -> &Self::Key;
}
