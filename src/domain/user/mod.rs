//! User account domain types

pub mod entity;

pub use entity::{User, Username};
