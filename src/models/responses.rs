//! Response DTOs for the key-value server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::store::{BulkReport, PairOutcome, StoreKind, StoreStatsSnapshot};

/// Response body for the GET operation (GET /get?key=)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The stored value
    pub value: String,
}

impl GetResponse {
    /// Creates a new GetResponse
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Acknowledgement body for writes that touch a single key
/// (POST /set, PATCH /update, DELETE /delete)
#[derive(Debug, Clone, Serialize)]
pub struct KeyResponse {
    /// Success message
    pub message: String,
    /// The key that was written or removed
    pub key: String,
}

impl KeyResponse {
    pub fn set(key: impl Into<String>) -> Self {
        Self::with_action(key.into(), "set")
    }

    pub fn updated(key: impl Into<String>) -> Self {
        Self::with_action(key.into(), "updated")
    }

    pub fn deleted(key: impl Into<String>) -> Self {
        Self::with_action(key.into(), "deleted")
    }

    fn with_action(key: String, action: &str) -> Self {
        Self {
            message: format!("Key '{}' {} successfully", key, action),
            key,
        }
    }
}

/// Response body for PATCH /updateBulk when at least one pair was applied
#[derive(Debug, Clone, Serialize)]
pub struct BulkUpdateResponse {
    /// Number of pairs applied
    pub updated: usize,
    /// Number of pairs skipped because the key was absent
    pub skipped: usize,
    /// Per-pair outcome, in request order
    pub results: Vec<PairOutcome>,
}

impl From<BulkReport> for BulkUpdateResponse {
    fn from(report: BulkReport) -> Self {
        Self {
            updated: report.applied(),
            skipped: report.skipped(),
            results: report.into_results(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Backend serving this listener
    pub backend: &'static str,
    /// Number of successful lookups
    pub hits: u64,
    /// Number of lookups for absent keys
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Current number of entries in the store
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    pub fn new(kind: StoreKind, stats: StoreStatsSnapshot) -> Self {
        Self {
            backend: kind.as_str(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Backend serving this listener
    pub backend: &'static str,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(kind: StoreKind) -> Self {
        Self {
            status: "healthy".to_string(),
            backend: kind.as_str(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
