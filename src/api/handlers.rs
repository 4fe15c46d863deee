//! API Handlers
//!
//! HTTP request handlers for each key-value server endpoint. Handlers only
//! validate input and map store outcomes to status codes; the store behind
//! `AppState` decides everything else.

use std::num::NonZeroUsize;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::error::{KvError, Result};
use crate::models::{
    validate_bulk, BulkUpdateResponse, GetResponse, HealthResponse, KeyQuery, KeyResponse,
    KeyValueRequest, StatsResponse,
};
use crate::store::{BulkOutcome, LruStore, MapStore, Pair, Store};

/// Application state shared across all handlers.
///
/// Holds the store as a trait object so one router serves either backend.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: impl Store + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// State backed by an unbounded `MapStore`.
    pub fn map() -> Self {
        Self::new(MapStore::new())
    }

    /// State backed by an `LruStore` of the given capacity.
    pub fn lru(capacity: NonZeroUsize) -> Self {
        Self::new(LruStore::new(capacity))
    }
}

/// Handler for POST /set
///
/// Inserts or overwrites a key. Always 201 for a valid body.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<KeyValueRequest>,
) -> Result<(StatusCode, Json<KeyResponse>)> {
    if let Some(error_msg) = req.validate() {
        return Err(KvError::InvalidRequest(error_msg));
    }

    let key = req.key.clone();
    state.store.set(req.key, req.value);

    Ok((StatusCode::CREATED, Json(KeyResponse::set(key))))
}

/// Handler for GET /get?key=
pub async fn get_handler(
    State(state): State<AppState>,
    Query(query): Query<KeyQuery>,
) -> Result<Json<GetResponse>> {
    if let Some(error_msg) = query.validate() {
        return Err(KvError::InvalidRequest(error_msg));
    }

    match state.store.get(&query.key) {
        Some(value) => Ok(Json(GetResponse::new(query.key, value))),
        None => Err(KvError::NotFound(query.key)),
    }
}

/// Handler for DELETE /delete?key=
pub async fn delete_handler(
    State(state): State<AppState>,
    Query(query): Query<KeyQuery>,
) -> Result<Json<KeyResponse>> {
    if let Some(error_msg) = query.validate() {
        return Err(KvError::InvalidRequest(error_msg));
    }

    if state.store.delete(&query.key) {
        Ok(Json(KeyResponse::deleted(query.key)))
    } else {
        Err(KvError::NotFound(query.key))
    }
}

/// Handler for PATCH /update
///
/// Overwrites a single existing key; absent keys are not created.
pub async fn update_handler(
    State(state): State<AppState>,
    Json(req): Json<KeyValueRequest>,
) -> Result<Json<KeyResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(KvError::InvalidRequest(error_msg));
    }

    if state.store.update(&req.key, req.value) {
        Ok(Json(KeyResponse::updated(req.key)))
    } else {
        Err(KvError::NotFound(req.key))
    }
}

/// Handler for PATCH /updateBulk
///
/// - 200 when every pair was applied
/// - 206 when some pairs were skipped
/// - 404 when no pair matched an existing key
pub async fn update_bulk_handler(
    State(state): State<AppState>,
    Json(reqs): Json<Vec<KeyValueRequest>>,
) -> Result<(StatusCode, Json<BulkUpdateResponse>)> {
    if let Some(error_msg) = validate_bulk(&reqs) {
        return Err(KvError::InvalidRequest(error_msg));
    }

    let pairs: Vec<Pair> = reqs.into_iter().map(Pair::from).collect();
    let report = state.store.update_bulk(pairs);
    debug!(
        backend = %state.store.kind(),
        applied = report.applied(),
        skipped = report.skipped(),
        "bulk update finished"
    );

    let status = match report.outcome() {
        BulkOutcome::Applied => StatusCode::OK,
        BulkOutcome::Partial => StatusCode::PARTIAL_CONTENT,
        BulkOutcome::NoneApplied => return Err(KvError::NothingUpdated(report.into_results())),
    };

    Ok((status, Json(BulkUpdateResponse::from(report))))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(state.store.kind(), state.store.stats()))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.store.kind()))
}
