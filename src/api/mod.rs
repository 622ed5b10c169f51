//! HTTP API layer: routing, handlers, and wire types

pub mod account;
pub mod catalog;
pub mod health;
pub mod router;
pub mod state;
pub mod team;
pub mod types;

pub use router::create_router;
pub use state::AppState;
