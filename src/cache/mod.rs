//! Cache Module
//!
//! Read-through memoization for data store reads. Reads populate the
//! cache on miss; writes invalidate either a single key's entry or
//! everything, synchronously before they acknowledge.

mod layer;
mod read_cache;
mod stats;


// Re-export public types
pub use layer::CacheLayer;
pub use read_cache::ReadCache;
pub use stats::{CacheStats, StatsSnapshot};
