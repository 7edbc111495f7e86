//! api — HTTP surface mapping REST endpoints onto a `RecordStore`.
//!
//! Uses axum for routing. Handlers are generic over the store type, so any
//! `RecordStore` implementation can back the service.
//!
//! ## Routes
//!
//! - `GET /` — health text.
//! - `GET /data` — all records as a JSON array.
//! - `POST /data` — append a record. Body = JSON record.
//! - `GET /data/:id` — fetch a single record by id.
//! - `PUT /data` — replace the record with a matching id. Body = JSON record.
//! - `DELETE /data/:id` — remove the record with a matching id.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use record_service::{api, InMemoryRecordStore};
//!
//! let store = Arc::new(InMemoryRecordStore::new());
//!
//! // Get the router to compose with other axum routes
//! let app = api::router(store.clone());
//!
//! // Or serve directly
//! api::serve(store, "0.0.0.0:3000").await?;
//! ```

mod error;
mod http;

pub use error::ApiError;
pub use http::{router, serve};
