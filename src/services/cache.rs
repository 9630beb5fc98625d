// In-memory cache implementation with per-entry expiry
//
// Design Decision: mutex-guarded HashMap with lazy eviction
//
// Entries carry an optional expiry instant; expired entries are removed on
// the next get/has that touches them, not by a background timer. The mutex
// makes a shared MemoryCache safe for concurrent collaborators even though
// the library itself performs no concurrent mutation.

use super::traits::Cache;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// A stored value plus its optional expiry instant
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Instant::now() >= at)
    }
}

/// Thread-safe in-memory cache
///
/// TTL semantics: `None` means the entry never expires;
/// `Some(Duration::ZERO)` means it expires immediately (dead on arrival).
/// The two states are distinct by construction, so a zero duration is never
/// mistaken for "no TTL". A TTL too large to represent as an expiry instant
/// is stored as non-expiring.
///
/// Usage:
///     let cache = MemoryCache::new();
///     cache.set("greeting", json!("hello"), None);
///     assert!(cache.has("greeting"));
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove all entries
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of stored entries
    ///
    /// Counts expired entries that have not been evicted yet; eviction
    /// happens lazily on the next `get`/`has` that touches the entry.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the cache holds no entries at all
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Lock the backing map, recovering from a poisoned mutex
    ///
    /// A panic in another thread mid-operation leaves at worst a stale
    /// entry, so continuing with the inner data is sound.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Cache for MemoryCache {
    fn get(&self, key: &str) -> Option<Value> {
        let mut entries = self.lock();

        match entries.get(key) {
            Some(entry) if entry.is_expired() => {
                entries.remove(key);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    fn set(&self, key: &str, value: Value, ttl: Option<Duration>) {
        // A TTL too large to represent as an expiry instant degrades to
        // "never expires" instead of panicking
        let entry = CacheEntry {
            value,
            expires_at: ttl.and_then(|ttl| Instant::now().checked_add(ttl)),
        };

        self.lock().insert(key.to_string(), entry);
    }

    fn delete(&self, key: &str) -> bool {
        self.lock().remove(key).is_some()
    }

    fn has(&self, key: &str) -> bool {
        let mut entries = self.lock();

        match entries.get(key) {
            Some(entry) if entry.is_expired() => {
                entries.remove(key);
                false
            }
            Some(_) => true,
            None => false,
        }
    }
}
