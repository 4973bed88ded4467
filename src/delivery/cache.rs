//! Time-bounded cache for tracker metadata.
//!
//! An explicit key → `{value, stored_at}` map with TTL expiry, replaced
//! wholesale on refresh. The current time is passed in by the caller, so
//! expiry behaviour is unit-testable without waiting out real TTLs.

use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::RwLock;

struct CacheEntry<V> {
    value: V,
    stored_at: DateTime<Utc>,
}

/// Thread-safe TTL cache.
///
/// Reads under a poisoned lock degrade to cache misses; callers re-fetch,
/// which is the same recovery path as an expired entry.
pub struct TtlCache<K, V> {
    ttl: TimeDelta,
    entries: RwLock<HashMap<K, CacheEntry<V>>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// Creates an empty cache with the given entry lifetime.
    #[must_use]
    pub fn new(ttl: TimeDelta) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the cached value for `key` if it was stored within the TTL
    /// as of `now`.
    #[must_use]
    pub fn get(&self, key: &K, now: DateTime<Utc>) -> Option<V> {
        let entries = self.entries.read().ok()?;
        let entry = entries.get(key)?;
        if now.signed_duration_since(entry.stored_at) >= self.ttl {
            return None;
        }
        Some(entry.value.clone())
    }

    /// Stores a value for `key`, replacing any previous entry wholesale.
    pub fn insert(&self, key: K, value: V, now: DateTime<Utc>) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(
                key,
                CacheEntry {
                    value,
                    stored_at: now,
                },
            );
        }
    }
}

impl<K, V> std::fmt::Debug for TtlCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtlCache").field("ttl", &self.ttl).finish()
    }
}
