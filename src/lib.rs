//! Readthrough - a key-value store over HTTP with a read-through cache
//!
//! Reads populate a per-operation cache on miss; writes mutate the
//! store and invalidate the affected cache entries before they
//! acknowledge.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
