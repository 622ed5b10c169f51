//! Product listing and cart

pub mod service;

pub use service::{CatalogService, NewCartItem, NewProduct};
