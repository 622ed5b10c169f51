//! Team catalog and assignment

pub mod service;

pub use service::TeamService;
