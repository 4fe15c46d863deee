//! LRU Cache Module
//!
//! Fixed-capacity map with recency ordering, used by `LruStore`.
//!
//! Entries live in an arena of nodes linked by slot index:
//! - `head` = most recently used
//! - `tail` = least recently used
//!
//! A `HashMap` from key to slot gives O(1) lookup; moving a node to the front and
//! evicting the tail are O(1) link updates. Freed slots are reused by later inserts.

use std::collections::HashMap;
use std::mem;
use std::num::NonZeroUsize;

#[derive(Debug)]
struct Node {
    key: String,
    value: String,
    prev: Option<usize>,
    next: Option<usize>,
}

// == LRU Cache ==
/// Single-threaded LRU cache. Callers provide their own synchronization.
#[derive(Debug)]
pub struct LruCache {
    index: HashMap<String, usize>,
    nodes: Vec<Node>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    capacity: NonZeroUsize,
}

impl LruCache {
    // == Constructor ==
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity.get()),
            nodes: Vec::with_capacity(capacity.get()),
            free: Vec::new(),
            head: None,
            tail: None,
            capacity,
        }
    }

    // == Get ==
    /// Returns the value for `key` and marks it most recently used.
    pub fn get(&mut self, key: &str) -> Option<&String> {
        let idx = *self.index.get(key)?;
        self.move_to_front(idx);
        Some(&self.nodes[idx].value)
    }

    // == Peek ==
    /// Returns the value for `key` without touching recency.
    pub fn peek(&self, key: &str) -> Option<&String> {
        self.index.get(key).map(|&idx| &self.nodes[idx].value)
    }

    // == Put ==
    /// Inserts or overwrites `key` and marks it most recently used.
    ///
    /// Inserting a new key at capacity first evicts the least recently used entry,
    /// which is returned.
    pub fn put(&mut self, key: String, value: String) -> Option<(String, String)> {
        if let Some(&idx) = self.index.get(&key) {
            self.nodes[idx].value = value;
            self.move_to_front(idx);
            return None;
        }

        let evicted = if self.index.len() >= self.capacity.get() {
            self.pop_lru()
        } else {
            None
        };

        let idx = self.alloc(key.clone(), value);
        self.index.insert(key, idx);
        self.attach_front(idx);
        evicted
    }

    // == Update ==
    /// Overwrites the value of an existing key in place. Recency is unchanged.
    pub fn update(&mut self, key: &str, value: String) -> bool {
        match self.index.get(key) {
            Some(&idx) => {
                self.nodes[idx].value = value;
                true
            }
            None => false,
        }
    }

    // == Remove ==
    /// Removes `key`, leaving the relative order of other keys intact.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let idx = *self.index.get(key)?;
        self.detach(idx);
        let (_, value) = self.release(idx);
        Some(value)
    }

    // == Pop LRU ==
    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(String, String)> {
        let idx = self.tail?;
        self.detach(idx);
        Some(self.release(idx))
    }

    // == Peek LRU ==
    /// Returns the least recently used key without removing it.
    pub fn peek_lru(&self) -> Option<&str> {
        self.tail.map(|idx| self.nodes[idx].key.as_str())
    }

    /// Keys ordered from most to least recently used.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys = Vec::with_capacity(self.index.len());
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let node = &self.nodes[idx];
            keys.push(node.key.as_str());
            cursor = node.next;
        }
        keys
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    // == Arena Helpers ==
    fn alloc(&mut self, key: String, value: String) -> usize {
        let node = Node {
            key,
            value,
            prev: None,
            next: None,
        };
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Drops the index entry and returns the slot to the free list.
    /// The node must already be detached.
    fn release(&mut self, idx: usize) -> (String, String) {
        let node = &mut self.nodes[idx];
        let key = mem::take(&mut node.key);
        let value = mem::take(&mut node.value);
        self.index.remove(&key);
        self.free.push(idx);
        (key, value)
    }

    fn detach(&mut self, idx: usize) {
        let (prev, next) = {
            let node = &self.nodes[idx];
            (node.prev, node.next)
        };

        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }

        let node = &mut self.nodes[idx];
        node.prev = None;
        node.next = None;
    }

    fn attach_front(&mut self, idx: usize) {
        self.nodes[idx].prev = None;
        self.nodes[idx].next = self.head;

        match self.head {
            Some(h) => self.nodes[h].prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }

    fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return;
        }
        self.detach(idx);
        self.attach_front(idx);
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn cache(capacity: usize) -> LruCache {
        LruCache::new(NonZeroUsize::new(capacity).unwrap())
    }

    fn put(lru: &mut LruCache, key: &str) -> Option<(String, String)> {
        lru.put(key.to_string(), format!("{}_value", key))
    }

    #[test]
    fn test_lru_new() {
        let lru = cache(3);
        assert!(lru.is_empty());
        assert_eq!(lru.len(), 0);
        assert_eq!(lru.capacity().get(), 3);
        assert_eq!(lru.peek_lru(), None);
    }

    #[test]
    fn test_lru_put_new_keys() {
        let mut lru = cache(5);

        put(&mut lru, "key1");
        put(&mut lru, "key2");
        put(&mut lru, "key3");

        assert_eq!(lru.len(), 3);
        // key1 is oldest (added first)
        assert_eq!(lru.peek_lru(), Some("key1"));
        assert_eq!(lru.keys(), vec!["key3", "key2", "key1"]);
    }

    #[test]
    fn test_lru_get_moves_to_front() {
        let mut lru = cache(5);

        put(&mut lru, "a");
        put(&mut lru, "b");
        put(&mut lru, "c");

        assert_eq!(lru.get("a").map(String::as_str), Some("a_value"));

        assert_eq!(lru.peek_lru(), Some("b"));
        assert_eq!(lru.keys(), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_lru_get_missing_leaves_order() {
        let mut lru = cache(5);

        put(&mut lru, "a");
        put(&mut lru, "b");

        assert!(lru.get("zzz").is_none());
        assert_eq!(lru.keys(), vec!["b", "a"]);
    }

    #[test]
    fn test_lru_peek_does_not_touch() {
        let mut lru = cache(5);

        put(&mut lru, "a");
        put(&mut lru, "b");

        assert_eq!(lru.peek("a").map(String::as_str), Some("a_value"));
        assert_eq!(lru.peek_lru(), Some("a"));
    }

    #[test]
    fn test_lru_overwrite_moves_to_front_without_eviction() {
        let mut lru = cache(2);

        put(&mut lru, "a");
        put(&mut lru, "b");

        assert!(lru.put("a".to_string(), "new".to_string()).is_none());

        assert_eq!(lru.len(), 2);
        assert_eq!(lru.keys(), vec!["a", "b"]);
        assert_eq!(lru.peek("a").map(String::as_str), Some("new"));
    }

    #[test]
    fn test_lru_evicts_oldest_at_capacity() {
        let mut lru = cache(3);

        put(&mut lru, "key1");
        put(&mut lru, "key2");
        put(&mut lru, "key3");

        let evicted = put(&mut lru, "key4");
        assert_eq!(evicted, Some(("key1".to_string(), "key1_value".to_string())));
        assert_eq!(lru.len(), 3);
        assert!(!lru.contains("key1"));
        assert_eq!(lru.peek_lru(), Some("key2"));
    }

    #[test]
    fn test_lru_capacity_one() {
        let mut lru = cache(1);

        put(&mut lru, "a");
        let evicted = put(&mut lru, "b");

        assert_eq!(evicted.map(|(k, _)| k), Some("a".to_string()));
        assert_eq!(lru.keys(), vec!["b"]);
    }

    #[test]
    fn test_lru_update_keeps_recency() {
        let mut lru = cache(3);

        put(&mut lru, "a");
        put(&mut lru, "b");

        assert!(lru.update("a", "changed".to_string()));
        assert!(!lru.update("missing", "x".to_string()));

        assert_eq!(lru.keys(), vec!["b", "a"]);
        assert_eq!(lru.peek("a").map(String::as_str), Some("changed"));
        assert!(!lru.contains("missing"));
    }

    #[test]
    fn test_lru_remove_middle() {
        let mut lru = cache(5);

        put(&mut lru, "key1");
        put(&mut lru, "key2");
        put(&mut lru, "key3");

        assert_eq!(lru.remove("key2"), Some("key2_value".to_string()));
        assert_eq!(lru.remove("key2"), None);

        assert_eq!(lru.len(), 2);
        assert_eq!(lru.keys(), vec!["key3", "key1"]);
    }

    #[test]
    fn test_lru_remove_head_and_tail() {
        let mut lru = cache(5);

        put(&mut lru, "a");
        put(&mut lru, "b");
        put(&mut lru, "c");

        lru.remove("c");
        lru.remove("a");

        assert_eq!(lru.keys(), vec!["b"]);
        assert_eq!(lru.peek_lru(), Some("b"));

        lru.remove("b");
        assert!(lru.is_empty());
        assert_eq!(lru.peek_lru(), None);
        assert!(lru.keys().is_empty());
    }

    #[test]
    fn test_lru_pop_order_after_multiple_touches() {
        let mut lru = cache(5);

        put(&mut lru, "a");
        put(&mut lru, "b");
        put(&mut lru, "c");

        lru.get("a");
        lru.get("c");
        lru.get("b");

        // front=[b, c, a]=back
        assert_eq!(lru.pop_lru().map(|(k, _)| k), Some("a".to_string()));
        assert_eq!(lru.pop_lru().map(|(k, _)| k), Some("c".to_string()));
        assert_eq!(lru.pop_lru().map(|(k, _)| k), Some("b".to_string()));
        assert_eq!(lru.pop_lru(), None);
    }

    #[test]
    fn test_lru_reuses_freed_slots() {
        let mut lru = cache(2);

        for i in 0..100 {
            put(&mut lru, &format!("key{}", i));
        }

        assert_eq!(lru.len(), 2);
        assert!(lru.nodes.len() <= 3);
        assert_eq!(lru.keys(), vec!["key99", "key98"]);
    }
}
