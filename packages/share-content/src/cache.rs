//! Bounded, time-expiring memoization of generation results.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use crate::types::{Event, ShareConfig, ShareResult};

/// How long a cached result stays valid.
pub const CACHE_TTL_SECS: i64 = 300;

/// Upper bound on live cache entries.
pub const MAX_CACHE_SIZE: usize = 10;

struct CacheEntry {
    result: ShareResult,
    created_at: DateTime<Utc>,
}

/// In-memory result cache keyed by an input fingerprint.
///
/// Fingerprint collisions are possible and tolerated: a collision merely
/// serves another valid-for-different-input result until its TTL runs
/// out. The mutex guards the whole read-check-insert-evict sequence, so
/// a multi-threaded caller holds the map invariants (one entry per key,
/// never more than [`MAX_CACHE_SIZE`] entries) and never observes a
/// half-evicted map.
pub struct ResultCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch a live entry. Expiry is checked lazily on every read, so a
    /// stale entry is never returned even if eviction has not run yet.
    pub fn lookup(&self, key: &str, now: DateTime<Utc>) -> Option<ShareResult> {
        let entries = self.entries.lock().unwrap();
        entries
            .get(key)
            .filter(|e| now - e.created_at <= Duration::seconds(CACHE_TTL_SECS))
            .map(|e| e.result.clone())
    }

    /// Store a result. Expired entries are dropped first; if the cache is
    /// still full, the oldest entries go until the insert fits under
    /// [`MAX_CACHE_SIZE`].
    pub fn insert(&self, key: impl Into<String>, result: ShareResult, now: DateTime<Utc>) {
        let mut entries = self.entries.lock().unwrap();
        entries.retain(|_, e| now - e.created_at <= Duration::seconds(CACHE_TTL_SECS));
        while entries.len() >= MAX_CACHE_SIZE {
            let oldest = entries
                .iter()
                .min_by_key(|(_, e)| e.created_at)
                .map(|(k, _)| k.clone());
            match oldest {
                Some(k) => {
                    entries.remove(&k);
                }
                None => break,
            }
        }
        entries.insert(
            key.into(),
            CacheEntry {
                result,
                created_at: now,
            },
        );
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    /// Number of stored entries, live or not yet evicted.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

/// Stable fingerprint of the generation inputs.
///
/// Event identity triples `(id, start_at, title)` are encoded, sorted so
/// that input order does not matter, and hashed; the configuration is
/// hashed separately and both words form the key.
pub fn fingerprint(events: &[Event], config: &ShareConfig) -> String {
    let mut identities: Vec<String> = events
        .iter()
        .map(|e| format!("{}|{}|{}", e.id, e.start_at.to_rfc3339(), e.title))
        .collect();
    identities.sort();
    let event_hash = fnv1a_32(&identities.join("\n"));

    let config_hash = fnv1a_32(&format!(
        "{}|{}|{}",
        config.destination_url,
        config.base_message,
        config.hashtags.join(",")
    ));

    format!("{event_hash:08x}:{config_hash:08x}")
}

/// 32-bit FNV-1a. Fast and non-cryptographic; collisions only risk
/// serving a different cached result within the TTL.
fn fnv1a_32(input: &str) -> u32 {
    let mut hash: u32 = 0x811c_9dc5;
    for byte in input.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    hash
}
