//! Map Store Module
//!
//! Unbounded backend: a `HashMap` guarded by a readers-writer lock.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::store::{BulkReport, Pair, Store, StoreKind, StoreStats, StoreStatsSnapshot};

// == Map Store ==
/// Baseline store holding every entry until it is deleted.
///
/// Lookups share a read lock; every mutation takes the write lock for the whole call.
#[derive(Debug, Default)]
pub struct MapStore {
    entries: RwLock<HashMap<String, String>>,
    stats: StoreStats,
}

impl MapStore {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MapStore {
    fn set(&self, key: String, value: String) {
        self.entries.write().insert(key, value);
    }

    fn get(&self, key: &str) -> Option<String> {
        let value = self.entries.read().get(key).cloned();
        match value {
            Some(_) => self.stats.record_hit(),
            None => self.stats.record_miss(),
        }
        value
    }

    fn delete(&self, key: &str) -> bool {
        self.entries.write().remove(key).is_some()
    }

    fn update(&self, key: &str, value: String) -> bool {
        match self.entries.write().get_mut(key) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    fn update_bulk(&self, pairs: Vec<Pair>) -> BulkReport {
        let mut report = BulkReport::with_capacity(pairs.len());
        let mut entries = self.entries.write();

        for Pair { key, value } in pairs {
            let updated = match entries.get_mut(&key) {
                Some(slot) => {
                    *slot = value;
                    true
                }
                None => false,
            };
            report.record(key, updated);
        }

        report
    }

    fn stats(&self) -> StoreStatsSnapshot {
        self.stats.snapshot(self.len())
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }

    fn kind(&self) -> StoreKind {
        StoreKind::Map
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::BulkOutcome;

    #[test]
    fn test_store_new() {
        let store = MapStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.kind(), StoreKind::Map);
    }

    #[test]
    fn test_store_set_and_get() {
        let store = MapStore::new();

        store.set("key1".to_string(), "value1".to_string());

        assert_eq!(store.get("key1").as_deref(), Some("value1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let store = MapStore::new();
        assert!(store.get("nonexistent").is_none());
    }

    #[test]
    fn test_store_overwrite() {
        let store = MapStore::new();

        store.set("key1".to_string(), "value1".to_string());
        store.set("key1".to_string(), "value2".to_string());

        assert_eq!(store.get("key1").as_deref(), Some("value2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_delete() {
        let store = MapStore::new();

        store.set("key1".to_string(), "value1".to_string());

        assert!(store.delete("key1"));
        assert!(store.get("key1").is_none());
        assert!(!store.delete("key1"));
    }

    #[test]
    fn test_store_unbounded() {
        let store = MapStore::new();
        for i in 0..10_000 {
            store.set(format!("key{}", i), i.to_string());
        }
        assert_eq!(store.len(), 10_000);
        assert_eq!(store.get("key0").as_deref(), Some("0"));
    }

    #[test]
    fn test_update_existing_only() {
        let store = MapStore::new();
        store.set("present".to_string(), "old".to_string());

        assert!(store.update("present", "new".to_string()));
        assert!(!store.update("absent", "new".to_string()));

        assert_eq!(store.get("present").as_deref(), Some("new"));
        assert!(store.get("absent").is_none());
    }

    #[test]
    fn test_update_bulk_full_success() {
        let store = MapStore::new();
        for i in 0..5 {
            store.set(format!("key{}", i), "old".to_string());
        }

        let pairs = (0..5)
            .map(|i| Pair::new(format!("key{}", i), format!("value{}", i)))
            .collect();
        let report = store.update_bulk(pairs);

        assert_eq!(report.outcome(), BulkOutcome::Applied);
        for i in 0..5 {
            assert_eq!(store.get(&format!("key{}", i)), Some(format!("value{}", i)));
        }
    }

    #[test]
    fn test_update_bulk_partial_does_not_create() {
        let store = MapStore::new();
        store.set("existing".to_string(), "old".to_string());

        let report = store.update_bulk(vec![
            Pair::new("existing", "new"),
            Pair::new("missing", "value"),
        ]);

        assert_eq!(report.outcome(), BulkOutcome::Partial);
        assert_eq!(report.applied(), 1);
        assert_eq!(report.skipped(), 1);
        assert!(store.get("missing").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_bulk_duplicates_apply_in_order() {
        let store = MapStore::new();
        store.set("k".to_string(), "v0".to_string());

        let report = store.update_bulk(vec![Pair::new("k", "v1"), Pair::new("k", "v2")]);

        assert_eq!(report.len(), 2);
        assert_eq!(report.applied(), 2);
        assert_eq!(store.get("k").as_deref(), Some("v2"));
    }

    #[test]
    fn test_stats_track_lookups() {
        let store = MapStore::new();
        store.set("key1".to_string(), "value1".to_string());
        store.get("key1");
        store.get("nonexistent");

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.evictions, 0);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_concurrent_sets_same_key() {
        let store = MapStore::new();
        let writers = 16;

        std::thread::scope(|s| {
            for i in 0..writers {
                let store = &store;
                s.spawn(move || {
                    for _ in 0..200 {
                        store.set("shared".to_string(), format!("value{}", i));
                    }
                });
            }
        });

        let value = store.get("shared").unwrap();
        let candidates: Vec<String> = (0..writers).map(|i| format!("value{}", i)).collect();
        assert!(candidates.contains(&value));
        assert_eq!(store.len(), 1);
    }
}
