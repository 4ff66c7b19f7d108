//! API Module
//!
//! HTTP handlers and routing for the key-value service REST API.
//!
//! # Endpoints
//! - `GET /api/allDataAsString` - Text rendering of the full map
//! - `GET /api/allDataAsDictionary` - Full map as a JSON object
//! - `GET /api/data/:key` - Retrieve a value by key
//! - `POST /api/data` - Upsert a key-value pair
//! - `PUT /api/data/:key` - Update an existing key
//! - `DELETE /api/data/:key` - Delete a key
//! - `GET /stats` - Cache counters
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
