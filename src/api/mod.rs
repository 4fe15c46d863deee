//! API Module
//!
//! HTTP handlers and routing for the key-value server REST API.
//!
//! # Endpoints
//! - `POST /set` - Store a key-value pair
//! - `GET /get?key=` - Retrieve a value by key
//! - `DELETE /delete?key=` - Delete a key
//! - `PATCH /update` - Overwrite one existing key
//! - `PATCH /updateBulk` - Overwrite many existing keys
//! - `GET /stats` - Get store statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
