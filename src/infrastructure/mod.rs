//! Infrastructure layer - services and gateway implementations

pub mod account;
pub mod catalog;
pub mod logging;
pub mod storage;
pub mod team;
