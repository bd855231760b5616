//! Bounded insertion-ordered cache for parsed summaries.

use indexmap::IndexMap;

/// Maximum number of summaries kept in memory.
pub const CACHE_CAPACITY: usize = 50;
/// How many of the oldest entries are dropped when the cache is full.
pub const EVICTION_BATCH: usize = 10;

/// Insertion-ordered map that evicts a batch of its structurally
/// oldest entries when an insert would exceed capacity.
///
/// Not synchronized: hosts calling from multiple threads must
/// serialize access externally.
#[derive(Debug)]
pub struct BoundedCache<V> {
    entries: IndexMap<String, V>,
    capacity: usize,
    eviction_batch: usize,
}

impl<V> BoundedCache<V> {
    pub fn new(capacity: usize, eviction_batch: usize) -> Self {
        Self {
            entries: IndexMap::new(),
            capacity,
            eviction_batch,
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Insert `value` under `key`, evicting the oldest entries first if
    /// the cache is at capacity. Front-of-map order is insertion order,
    /// so `shift_remove_index(0)` always drops the oldest survivor.
    pub fn insert(&mut self, key: String, value: V) {
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            let batch = self.eviction_batch.min(self.entries.len());
            for _ in 0..batch {
                self.entries.shift_remove_index(0);
            }
        }

        self.entries.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for BoundedCache<V> {
    fn default() -> Self {
        Self::new(CACHE_CAPACITY, EVICTION_BATCH)
    }
}
