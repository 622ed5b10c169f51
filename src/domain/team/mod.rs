//! Team catalog and assignment domain types

pub mod entity;
pub mod seed;

pub use entity::{TeamAssignment, TeamName, TeamReference};
pub use seed::seed_catalog;
