//! Request DTOs for the key-value service API
//!
//! Defines the structure of incoming HTTP request bodies and
//! parameters.

use serde::Deserialize;

/// Request body for POST /api/data
///
/// Both fields are optional at the serde level so an incomplete
/// payload surfaces as a 400 through [`into_fields`](Self::into_fields)
/// rather than a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertRequest {
    /// The key to store the value under
    pub key: Option<String>,
    /// The value to store
    pub value: Option<String>,
}

impl UpsertRequest {
    /// Extracts the (key, value) pair, validating presence and that
    /// the key is non-empty.
    pub fn into_fields(self) -> Result<(String, String), String> {
        let key = self
            .key
            .ok_or_else(|| "Missing required field 'key'".to_string())?;
        let value = self
            .value
            .ok_or_else(|| "Missing required field 'value'".to_string())?;
        if key.is_empty() {
            return Err("Key cannot be empty".to_string());
        }
        Ok((key, value))
    }
}

/// Query parameters for PUT /api/data/{key}
#[derive(Debug, Clone, Deserialize)]
pub struct ValueParam {
    /// The new value for the key
    pub value: String,
}
