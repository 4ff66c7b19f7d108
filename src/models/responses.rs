//! Response DTOs for the key-value service API
//!
//! Defines the structure of outgoing HTTP response bodies. The read
//! endpoints answer with raw values (text or a JSON map); these types
//! cover the write acknowledgements and the observability endpoints.

use serde::Serialize;

/// Acknowledgement body for the write endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct WriteAck {
    /// Success message
    pub message: String,
    /// The key that was written
    pub key: String,
}

impl WriteAck {
    /// Acknowledges a POST upsert.
    pub fn stored(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' stored successfully", key),
            key,
        }
    }

    /// Acknowledges a PUT update.
    pub fn updated(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' updated successfully", key),
            key,
        }
    }

    /// Acknowledges a DELETE.
    pub fn deleted(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' deleted successfully", key),
            key,
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
    /// Creates a new HealthResponse with current timestamp.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
