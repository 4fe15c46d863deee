//! LRU Store Module
//!
//! Bounded backend: an `LruCache` behind a single mutex.

use std::num::NonZeroUsize;

use parking_lot::Mutex;
use tracing::debug;

use crate::store::{BulkReport, LruCache, Pair, Store, StoreKind, StoreStats, StoreStatsSnapshot};

// == LRU Store ==
/// Store holding at most `capacity` entries, evicting the least recently used.
///
/// The key index and the recency list are only ever touched together under the
/// mutex, so both stay consistent at every point another caller can observe.
/// `set` and successful `get` refresh recency. `update` and `update_bulk` do not.
#[derive(Debug)]
pub struct LruStore {
    cache: Mutex<LruCache>,
    stats: StoreStats,
}

impl LruStore {
    // == Constructor ==
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            cache: Mutex::new(LruCache::new(capacity)),
            stats: StoreStats::new(),
        }
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.cache.lock().capacity()
    }
}

impl Store for LruStore {
    fn set(&self, key: String, value: String) {
        let evicted = self.cache.lock().put(key, value);

        if let Some((evicted_key, _)) = evicted {
            self.stats.record_eviction();
            debug!(key = %evicted_key, "evicted least recently used entry");
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        let value = self.cache.lock().get(key).cloned();
        match value {
            Some(_) => self.stats.record_hit(),
            None => self.stats.record_miss(),
        }
        value
    }

    fn delete(&self, key: &str) -> bool {
        self.cache.lock().remove(key).is_some()
    }

    fn update(&self, key: &str, value: String) -> bool {
        self.cache.lock().update(key, value)
    }

    fn update_bulk(&self, pairs: Vec<Pair>) -> BulkReport {
        let mut report = BulkReport::with_capacity(pairs.len());
        let mut cache = self.cache.lock();

        for Pair { key, value } in pairs {
            let updated = cache.update(&key, value);
            report.record(key, updated);
        }

        report
    }

    fn stats(&self) -> StoreStatsSnapshot {
        self.stats.snapshot(self.len())
    }

    fn len(&self) -> usize {
        self.cache.lock().len()
    }

    fn kind(&self) -> StoreKind {
        StoreKind::Lru
    }
}
