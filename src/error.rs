//! Error types for the key-value server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::PairOutcome;

// == KV Error Enum ==
/// Errors the dispatcher reports to clients.
///
/// Store operations never fail; these only describe negative outcomes and
/// requests rejected before they reach the store.
#[derive(Error, Debug)]
pub enum KvError {
    /// Key not found in store
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Bulk update where no pair matched an existing key
    #[error("No keys updated: none of the {} keys exist", .0.len())]
    NothingUpdated(Vec<PairOutcome>),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for KvError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        let (status, body) = match self {
            KvError::NotFound(_) => (StatusCode::NOT_FOUND, json!({ "error": message })),
            KvError::NothingUpdated(results) => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": message,
                    "updated": 0,
                    "skipped": results.len(),
                    "results": results,
                }),
            ),
            KvError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, json!({ "error": message })),
        };

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the key-value server.
pub type Result<T> = std::result::Result<T, KvError>;
