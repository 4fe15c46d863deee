//! Request DTOs for the key-value server API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use crate::store::{Pair, MAX_KEY_LENGTH, MAX_VALUE_SIZE};

/// Request body for POST /set and PATCH /update, and each element of PATCH /updateBulk
///
/// # Fields
/// - `key`: The key to write
/// - `value`: The value to store under it
#[derive(Debug, Clone, Deserialize)]
pub struct KeyValueRequest {
    pub key: String,
    pub value: String,
}

impl KeyValueRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if let Some(error) = validate_key(&self.key) {
            return Some(error);
        }
        if self.value.len() > MAX_VALUE_SIZE {
            return Some(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            ));
        }
        None
    }
}

impl From<KeyValueRequest> for Pair {
    fn from(req: KeyValueRequest) -> Self {
        Pair {
            key: req.key,
            value: req.value,
        }
    }
}

/// Query string for GET /get and DELETE /delete (`?key=...`)
#[derive(Debug, Clone, Deserialize)]
pub struct KeyQuery {
    pub key: String,
}

impl KeyQuery {
    pub fn validate(&self) -> Option<String> {
        validate_key(&self.key)
    }
}

/// Validates a bulk update body. Every pair must pass on its own.
pub fn validate_bulk(pairs: &[KeyValueRequest]) -> Option<String> {
    if pairs.is_empty() {
        return Some("Bulk update requires at least one pair".to_string());
    }
    pairs
        .iter()
        .enumerate()
        .find_map(|(i, pair)| pair.validate().map(|error| format!("Pair {}: {}", i, error)))
}

fn validate_key(key: &str) -> Option<String> {
    if key.is_empty() {
        return Some("Key cannot be empty".to_string());
    }
    if key.len() > MAX_KEY_LENGTH {
        return Some(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        ));
    }
    None
}
