//! Approximate pattern-count cache with LRU eviction and TTL expiry.
//!
//! Only counts above the admission threshold are stored: small counts are
//! cheap to recompute on the endpoint. Entry age is measured from insertion
//! and is never refreshed by reads, so a hot entry still expires on time.

use crate::query::TriplePattern;
use lru::LruCache;
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::debug;

/// Maximum number of cached patterns.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Age after which a cached count is treated as absent (3 hours).
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60 * 3);

/// Counts must exceed this value to be cached.
pub const DEFAULT_ADMISSION_THRESHOLD: u64 = 100_000;

/// Bounds and admission policy for a [`CountCache`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CountCacheConfig {
    /// Maximum entries before LRU eviction (clamped to at least 1)
    pub capacity: usize,
    /// Time-to-live, in seconds when deserialized
    #[serde(rename = "ttl_secs", with = "duration_secs")]
    pub ttl: Duration,
    /// Strict lower bound for admitted counts
    pub admission_threshold: u64,
}

impl Default for CountCacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            ttl: DEFAULT_TTL,
            admission_threshold: DEFAULT_ADMISSION_THRESHOLD,
        }
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer};
    use std::time::Duration;

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_secs)
    }
}

struct CountEntry {
    count: u64,
    inserted_at: Instant,
}

/// Size- and age-bounded map from pattern to approximate triple count.
///
/// Safe to share between concurrent count resolutions of one datasource.
pub struct CountCache {
    inner: Mutex<LruCache<TriplePattern, CountEntry>>,
    ttl: Duration,
    admission_threshold: u64,
}

impl CountCache {
    pub fn new(config: CountCacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
            ttl: config.ttl,
            admission_threshold: config.admission_threshold,
        }
    }

    /// Look up a count, treating entries older than the TTL as absent.
    pub fn get(&self, pattern: &TriplePattern) -> Option<u64> {
        self.get_at(pattern, Instant::now())
    }

    /// Look up a count as of `now`. Expired entries are removed.
    pub fn get_at(&self, pattern: &TriplePattern, now: Instant) -> Option<u64> {
        let mut cache = self.lock();
        let entry = cache.get(pattern)?;
        if now.saturating_duration_since(entry.inserted_at) < self.ttl {
            return Some(entry.count);
        }
        cache.pop(pattern);
        debug!(pattern = %pattern, "cached count expired");
        None
    }

    /// Offer a count. Returns whether it was admitted.
    pub fn put(&self, pattern: &TriplePattern, count: u64) -> bool {
        self.put_at(pattern, count, Instant::now())
    }

    /// Offer a count inserted at `now`. Replaces any previous entry.
    pub fn put_at(&self, pattern: &TriplePattern, count: u64, now: Instant) -> bool {
        if count <= self.admission_threshold {
            return false;
        }
        let evicted = self.lock().push(
            pattern.clone(),
            CountEntry {
                count,
                inserted_at: now,
            },
        );
        if let Some((old, _)) = evicted.filter(|(key, _)| key != pattern) {
            debug!(pattern = %old, "evicted least recently used count");
        }
        debug!(pattern = %pattern, count, "cached pattern count");
        true
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn admission_threshold(&self) -> u64 {
        self.admission_threshold
    }

    // A poisoned lock only means another resolution panicked mid-update;
    // every entry is still a complete (count, instant) pair.
    fn lock(&self) -> MutexGuard<'_, LruCache<TriplePattern, CountEntry>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CountCache {
    fn default() -> Self {
        Self::new(CountCacheConfig::default())
    }
}

impl std::fmt::Debug for CountCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountCache")
            .field("len", &self.len())
            .field("ttl", &self.ttl)
            .field("admission_threshold", &self.admission_threshold)
            .finish()
    }
}
