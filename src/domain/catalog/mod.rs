//! Product listing and cart domain types

pub mod entity;

pub use entity::{CartItem, CartItemId, Product, ProductId};
