//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, and
//! invalidations.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance counters.
///
/// Counters are atomics so they can be bumped through the shared
/// `&self` cache handles without an outer lock.
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Reads served from a cached entry
    hits: AtomicU64,
    /// Reads that had to compute against the data store
    misses: AtomicU64,
    /// Cached entries dropped by write invalidations
    invalidations: AtomicU64,
}

impl CacheStats {
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the hit counter.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the miss counter.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Adds `count` dropped entries to the invalidation counter.
    pub fn record_invalidations(&self, count: u64) {
        self.invalidations.fetch_add(count, Ordering::Relaxed);
    }

    /// Returns a serializable copy of the current counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        let hit_rate = if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        };

        StatsSnapshot {
            hits,
            misses,
            invalidations: self.invalidations.load(Ordering::Relaxed),
            hit_rate,
        }
    }
}

// == Stats Snapshot ==
/// Point-in-time view of the cache counters.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    /// Number of reads served from cache
    pub hits: u64,
    /// Number of reads computed against the store
    pub misses: u64,
    /// Number of cached entries dropped by invalidations
    pub invalidations: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}
