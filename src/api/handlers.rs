//! API Handlers
//!
//! HTTP request handlers for each endpoint. Every read goes through
//! the cache layer with the store lookup as the compute closure; every
//! write mutates the store, applies its invalidation scope, and only
//! then acknowledges.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tokio::sync::RwLock;

use crate::cache::{CacheLayer, StatsSnapshot};
use crate::error::{Result, StoreError};
use crate::models::{HealthResponse, UpsertRequest, ValueParam, WriteAck};
use crate::store::DataStore;

/// Application state shared across all handlers.
///
/// The data store is guarded by a single RwLock; the cache layer is
/// internally synchronized and shared as-is.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe data store
    pub store: Arc<RwLock<DataStore>>,
    /// Read-through cache over the store
    pub cache: Arc<CacheLayer>,
}

impl AppState {
    /// Creates a new AppState wrapping the given store with an empty
    /// cache.
    pub fn new(store: DataStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            cache: Arc::new(CacheLayer::new()),
        }
    }
}

/// Handler for GET /api/allDataAsString
///
/// Returns a text rendering of the full map, cached until the next
/// bulk invalidation.
pub async fn all_data_as_string_handler(State(state): State<AppState>) -> String {
    state
        .cache
        .get_all_text(|| async {
            let store = state.store.read().await;
            store.render_text()
        })
        .await
}

/// Handler for GET /api/allDataAsDictionary
///
/// Returns the full map as a JSON object, cached until the next bulk
/// invalidation.
pub async fn all_data_as_dictionary_handler(
    State(state): State<AppState>,
) -> Json<HashMap<String, String>> {
    let entries = state
        .cache
        .get_all_map(|| async {
            let store = state.store.read().await;
            store.get_all()
        })
        .await;

    Json(entries)
}

/// Handler for GET /api/data/:key
///
/// Returns the value as a text body; 404 if the key is absent. Missing
/// keys are never cached, so a later write is immediately visible.
pub async fn get_data_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<String> {
    state
        .cache
        .get_value(&key, || async {
            let store = state.store.read().await;
            store.get(&key)
        })
        .await
}

/// Handler for POST /api/data
///
/// Upserts a key-value pair from a JSON body, then invalidates every
/// cached read. 400 if a field is missing or the key is empty.
pub async fn upsert_data_handler(
    State(state): State<AppState>,
    Json(req): Json<UpsertRequest>,
) -> Result<Json<WriteAck>> {
    let (key, value) = req.into_fields().map_err(StoreError::BadRequest)?;

    {
        let mut store = state.store.write().await;
        store.put(key.clone(), value)?;
    }
    state.cache.invalidate_all().await;

    Ok(Json(WriteAck::stored(key)))
}

/// Handler for PUT /api/data/:key
///
/// Overwrites an existing key from the `value` query parameter, then
/// invalidates that key's cached read. 404 if the key is absent.
pub async fn update_data_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(param): Query<ValueParam>,
) -> Result<Json<WriteAck>> {
    {
        let mut store = state.store.write().await;
        store.update(&key, param.value)?;
    }
    state.cache.invalidate_key(&key).await;

    Ok(Json(WriteAck::updated(key)))
}

/// Handler for DELETE /api/data/:key
///
/// Removes a key, then invalidates that key's cached read. 404 if the
/// key is absent.
pub async fn delete_data_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<WriteAck>> {
    {
        let mut store = state.store.write().await;
        store.delete(&key)?;
    }
    state.cache.invalidate_key(&key).await;

    Ok(Json(WriteAck::deleted(key)))
}

/// Handler for GET /stats
///
/// Returns current cache counters.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsSnapshot> {
    Json(state.cache.stats())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
