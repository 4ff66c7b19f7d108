//! Cache Layer Module
//!
//! One read-through cache per logical read operation, plus the write
//! invalidation policy that couples the write paths to those caches.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tracing::debug;

use crate::cache::{CacheStats, ReadCache, StatsSnapshot};
use crate::error::Result;

// == Cache Layer ==
/// Wraps every read operation on the data store in a memoizing cache.
///
/// Each logical read operation gets its own cache, so the full-map
/// renderings and the single-key lookups never collide on a key. The
/// write paths call [`invalidate_key`](Self::invalidate_key) or
/// [`invalidate_all`](Self::invalidate_all) after the store mutation
/// and before the response is produced.
pub struct CacheLayer {
    /// Full map rendered as text (backs GET /api/allDataAsString)
    all_text: ReadCache<(), String>,
    /// Full map snapshot (backs GET /api/allDataAsDictionary)
    all_map: ReadCache<(), HashMap<String, String>>,
    /// Single-key lookups (backs GET /api/data/{key})
    single: ReadCache<String, String>,
    /// Counters shared by all three caches
    stats: Arc<CacheStats>,
}

impl CacheLayer {
    /// Creates an empty cache layer.
    pub fn new() -> Self {
        let stats = Arc::new(CacheStats::new());
        Self {
            all_text: ReadCache::new(Arc::clone(&stats)),
            all_map: ReadCache::new(Arc::clone(&stats)),
            single: ReadCache::new(Arc::clone(&stats)),
            stats,
        }
    }

    // == Cached Reads ==
    /// Returns the cached text rendering of the full map, computing it
    /// on miss.
    pub async fn get_all_text<F, Fut>(&self, compute: F) -> String
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = String>,
    {
        self.all_text.get_or_compute((), compute).await
    }

    /// Returns the cached snapshot of the full map, computing it on
    /// miss.
    pub async fn get_all_map<F, Fut>(&self, compute: F) -> HashMap<String, String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = HashMap<String, String>>,
    {
        self.all_map.get_or_compute((), compute).await
    }

    /// Returns the cached value for a single key, computing it on miss.
    ///
    /// A `NotFound` from the computation is passed through uncached, so
    /// a later put of the key is immediately visible.
    pub async fn get_value<F, Fut>(&self, key: &str, compute: F) -> Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        self.single.get_or_try_compute(key.to_string(), compute).await
    }

    // == Invalidation ==
    /// Invalidation scope for single-key writes: only the single-key
    /// read cache. The full-map caches keep whatever they hold; see
    /// the staleness tests in tests/api_integration_tests.rs.
    pub async fn invalidate_key(&self, key: &str) {
        debug!("Invalidating cached read for key '{}'", key);
        self.single.invalidate(&key.to_string()).await;
    }

    /// Invalidation scope for bulk writes: every cached read.
    pub async fn invalidate_all(&self) {
        debug!("Invalidating all cached reads");
        self.all_text.invalidate_all().await;
        self.all_map.invalidate_all().await;
        self.single.invalidate_all().await;
    }

    // == Stats ==
    /// Returns the current cache counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}

impl Default for CacheLayer {
    fn default() -> Self {
        Self::new()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_reads_are_memoized_per_operation() {
        let layer = CacheLayer::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            let text = layer
                .get_all_text(|| async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    "{a=1}".to_string()
                })
                .await;
            assert_eq!(text, "{a=1}");
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_operations_do_not_share_entries() {
        let layer = CacheLayer::new();

        let text = layer.get_all_text(|| async { "{a=1}".to_string() }).await;
        let map = layer
            .get_all_map(|| async { HashMap::from([("a".to_string(), "1".to_string())]) })
            .await;

        assert_eq!(text, "{a=1}");
        assert_eq!(map.get("a").unwrap(), "1");
    }

    #[tokio::test]
    async fn test_invalidate_key_drops_only_single_key_cache() {
        let layer = CacheLayer::new();
        let text_calls = AtomicUsize::new(0);
        let value_calls = AtomicUsize::new(0);

        layer
            .get_all_text(|| async {
                text_calls.fetch_add(1, Ordering::SeqCst);
                "{a=1}".to_string()
            })
            .await;
        layer
            .get_value("a", || async {
                value_calls.fetch_add(1, Ordering::SeqCst);
                Ok("1".to_string())
            })
            .await
            .unwrap();

        layer.invalidate_key("a").await;

        // Single-key read recomputes, full-map read does not.
        layer
            .get_value("a", || async {
                value_calls.fetch_add(1, Ordering::SeqCst);
                Ok("2".to_string())
            })
            .await
            .unwrap();
        layer
            .get_all_text(|| async {
                text_calls.fetch_add(1, Ordering::SeqCst);
                "{a=2}".to_string()
            })
            .await;

        assert_eq!(value_calls.load(Ordering::SeqCst), 2);
        assert_eq!(text_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalidate_key_leaves_other_keys_cached() {
        let layer = CacheLayer::new();
        let calls = AtomicUsize::new(0);

        for key in ["a", "b"] {
            layer
                .get_value(key, || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok("v".to_string())
                })
                .await
                .unwrap();
        }

        layer.invalidate_key("a").await;

        layer
            .get_value("b", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok("v".to_string())
            })
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    async fn fill(layer: &CacheLayer, calls: &AtomicUsize) {
        layer
            .get_all_text(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                "{}".to_string()
            })
            .await;
        layer
            .get_all_map(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                HashMap::new()
            })
            .await;
        layer
            .get_value("k", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok("v".to_string())
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_invalidate_all_drops_every_cache() {
        let layer = CacheLayer::new();
        let calls = AtomicUsize::new(0);

        fill(&layer, &calls).await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        layer.invalidate_all().await;

        fill(&layer, &calls).await;
        assert_eq!(calls.load(Ordering::SeqCst), 6);
    }

    #[tokio::test]
    async fn test_stats_reflect_hits_and_misses() {
        let layer = CacheLayer::new();

        layer.get_all_text(|| async { "{}".to_string() }).await;
        layer.get_all_text(|| async { "{}".to_string() }).await;

        let stats = layer.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.hit_rate, 0.5);
    }
}
