//! Read Cache Module
//!
//! A keyed single-flight memo map: each key owns a once-cell slot, and
//! concurrent readers of an uncomputed slot share one computation
//! instead of racing. Entries never expire on their own; they live
//! until an invalidation drops them.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;

use tokio::sync::{Mutex, OnceCell};

use crate::cache::CacheStats;

// == Read Cache ==
/// Memoizes the result of a read operation per key until invalidated.
///
/// Invalidation removes the slot from the map, so any read that starts
/// afterwards recomputes against the backing store. Readers that
/// already joined an in-flight computation keep their slot and may
/// still observe the pre-invalidation value; that window closes when
/// the invalidation call returns.
pub struct ReadCache<K, V> {
    /// Per-key computation slots
    slots: Mutex<HashMap<K, Arc<OnceCell<V>>>>,
    /// Shared hit/miss/invalidation counters
    stats: Arc<CacheStats>,
}

impl<K, V> ReadCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates an empty cache reporting into `stats`.
    pub fn new(stats: Arc<CacheStats>) -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            stats,
        }
    }

    /// Fetches or creates the slot for `key`, recording hit/miss.
    async fn slot(&self, key: &K) -> Arc<OnceCell<V>> {
        let mut slots = self.slots.lock().await;
        let cell = slots
            .entry(key.clone())
            .or_insert_with(|| Arc::new(OnceCell::new()))
            .clone();

        if cell.initialized() {
            self.stats.record_hit();
        } else {
            self.stats.record_miss();
        }
        cell
    }

    // == Get Or Compute ==
    /// Returns the cached value for `key`, computing it at most once.
    ///
    /// Under concurrent callers the computation runs exactly once for
    /// a given slot; the other callers wait on the cell and receive
    /// the same result.
    pub async fn get_or_compute<F, Fut>(&self, key: K, compute: F) -> V
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = V>,
    {
        let cell = self.slot(&key).await;
        cell.get_or_init(compute).await.clone()
    }

    // == Get Or Try Compute ==
    /// Fallible variant of [`get_or_compute`](Self::get_or_compute).
    ///
    /// Errors are returned to the caller and never cached; the
    /// placeholder slot is dropped so the next read retries the
    /// computation.
    pub async fn get_or_try_compute<F, Fut, E>(&self, key: K, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let cell = self.slot(&key).await;
        match cell.get_or_try_init(compute).await {
            Ok(value) => Ok(value.clone()),
            Err(err) => {
                let mut slots = self.slots.lock().await;
                if let Some(existing) = slots.get(&key) {
                    if Arc::ptr_eq(existing, &cell) && !existing.initialized() {
                        slots.remove(&key);
                    }
                }
                Err(err)
            }
        }
    }

    // == Invalidate ==
    /// Drops the entry for `key` if present; no-op otherwise.
    pub async fn invalidate(&self, key: &K) {
        if self.slots.lock().await.remove(key).is_some() {
            self.stats.record_invalidations(1);
        }
    }

    /// Drops every entry.
    pub async fn invalidate_all(&self) {
        let mut slots = self.slots.lock().await;
        let dropped = slots.len();
        slots.clear();
        if dropped > 0 {
            self.stats.record_invalidations(dropped as u64);
        }
    }

    /// Returns the number of computed entries currently held.
    pub async fn len(&self) -> usize {
        self.slots
            .lock()
            .await
            .values()
            .filter(|cell| cell.initialized())
            .count()
    }

    /// Returns true if no computed entries are held.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
