//! Shared API response types

pub mod error;

use serde::{Deserialize, Serialize};

pub use error::{ApiError, ApiErrorResponse};

/// Plain message response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
