//! API Routes
//!
//! Configures the Axum router with all key-value server endpoints.

use std::time::Duration;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::handlers::{
    delete_handler, get_handler, health_handler, set_handler, stats_handler,
    update_bulk_handler, update_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /set` - Store a key-value pair
/// - `GET /get?key=` - Retrieve a value by key
/// - `DELETE /delete?key=` - Delete a key
/// - `PATCH /update` - Overwrite one existing key
/// - `PATCH /updateBulk` - Overwrite many existing keys
/// - `GET /stats` - Get store statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Timeout: Requests running longer than `request_timeout` get 408
/// - CORS: Allows any origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    let routes = Router::new()
        .route("/set", post(set_handler))
        .route("/get", get(get_handler))
        .route("/delete", delete(delete_handler))
        .route("/update", patch(update_handler))
        .route("/updateBulk", patch(update_bulk_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler));

    with_middleware(routes, request_timeout).with_state(state)
}

/// Wraps `routes` in the timeout, CORS, and tracing layers.
fn with_middleware(routes: Router<AppState>, request_timeout: Duration) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes
        .layer(TimeoutLayer::new(request_timeout))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
