//! KV Store - A concurrent in-memory key-value server
//!
//! Serves one HTTP contract over two interchangeable backends: an unbounded
//! lock-guarded map and a bounded LRU cache.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use store::{LruStore, MapStore, Store, StoreKind};
