//! Store Module
//!
//! In-memory key-value engines sharing one contract. Two backends are provided:
//! a lock-guarded hash map with unbounded capacity and a bounded LRU cache.

mod bulk;
mod lru;
mod lru_store;
mod map;
mod stats;


use std::fmt;

// Re-export public types
pub use bulk::{BulkOutcome, BulkReport, Pair, PairOutcome};
pub use lru::LruCache;
pub use lru_store::LruStore;
pub use map::MapStore;
pub use stats::{StoreStats, StoreStatsSnapshot};

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB

// == Store Kind ==
/// Identifies which backend a store instance runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Unbounded hash map behind a readers-writer lock
    Map,
    /// Fixed-capacity LRU cache behind a mutex
    Lru,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::Map => "map",
            StoreKind::Lru => "lru",
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Store Trait ==
/// Capability set every backend implements.
///
/// All methods take `&self`: each backend owns its locking so one instance can be
/// shared behind an `Arc` by any number of concurrent callers. Every call runs in a
/// single bounded critical section and cannot fail; negative results are values.
pub trait Store: Send + Sync + fmt::Debug {
    /// Inserts or overwrites the value stored under `key`.
    fn set(&self, key: String, value: String);

    /// Returns the current value for `key`, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Removes `key`, reporting whether it was present.
    fn delete(&self, key: &str) -> bool;

    /// Overwrites the value of an existing key. Absent keys are left absent.
    fn update(&self, key: &str, value: String) -> bool;

    /// Applies update-only writes for every pair, in order, under one lock.
    ///
    /// Duplicate keys observe the effect of earlier pairs in the same batch.
    fn update_bulk(&self, pairs: Vec<Pair>) -> BulkReport;

    /// Returns a snapshot of the store's counters.
    fn stats(&self) -> StoreStatsSnapshot;

    /// Number of live entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn kind(&self) -> StoreKind;
}
