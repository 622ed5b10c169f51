//! Domain layer - record kinds and the persistence gateway contract

pub mod catalog;
pub mod error;
pub mod storage;
pub mod team;
pub mod user;

pub use catalog::{CartItem, CartItemId, Product, ProductId};
pub use error::DomainError;
pub use storage::{Storage, StorageEntity, StorageKey};
pub use team::{TeamAssignment, TeamName, TeamReference, seed_catalog};
pub use user::{User, Username};
