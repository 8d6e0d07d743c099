//! Response DTOs for the posts API
//!
//! Defines the structure of outgoing HTTP response bodies. Field names are
//! part of the wire contract and must not change.

use serde::Serialize;

/// Fixed message for any route addressing a post that does not exist.
pub const POST_NOT_FOUND: &str = "The post with the specified ID does not exist.";

/// Body carrying a `message` field (404s and delete confirmations)
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Confirmation returned by DELETE /:id
    pub fn deleted(id: &str) -> Self {
        Self::new(format!("Deleted post with id {}", id))
    }

    pub fn post_not_found() -> Self {
        Self::new(POST_NOT_FOUND)
    }
}

/// Body for 400 validation failures
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrorResponse {
    pub error_message: String,
}

impl ValidationErrorResponse {
    pub fn new(error_message: impl Into<String>) -> Self {
        Self {
            error_message: error_message.into(),
        }
    }
}

/// Body for 500 store failures
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
