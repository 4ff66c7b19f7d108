//! API Routes
//!
//! Configures the Axum router with all key-value service endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    all_data_as_dictionary_handler, all_data_as_string_handler, delete_data_handler,
    get_data_handler, health_handler, stats_handler, update_data_handler, upsert_data_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/allDataAsString` - Text rendering of the full map
/// - `GET /api/allDataAsDictionary` - Full map as a JSON object
/// - `GET /api/data/:key` - Retrieve a value by key
/// - `POST /api/data` - Upsert a key-value pair (JSON body)
/// - `PUT /api/data/:key` - Update an existing key (`value` query param)
/// - `DELETE /api/data/:key` - Delete a key
/// - `GET /stats` - Cache counters
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/api/allDataAsString", get(all_data_as_string_handler))
        .route(
            "/api/allDataAsDictionary",
            get(all_data_as_dictionary_handler),
        )
        .route("/api/data", post(upsert_data_handler))
        .route(
            "/api/data/:key",
            get(get_data_handler)
                .put(update_data_handler)
                .delete(delete_data_handler),
        )
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
