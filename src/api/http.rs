//! HTTP transport — maps the REST endpoints to record store operations.
//!
//! Bodies carrying records use `application/json`; confirmation and error
//! bodies are plain text with fixed messages.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use super::error::ApiError;
use crate::record::Record;
use crate::store::RecordStore;

/// Build an axum `Router` serving the record endpoints over the given store.
pub fn router<S: RecordStore + 'static>(store: Arc<S>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route(
            "/data",
            get(list_handler)
                .post(create_handler)
                .put(update_handler),
        )
        .route("/data/:id", get(find_handler).delete(delete_handler))
        .with_state(store)
}

/// Serve the record endpoints over HTTP at the given address (e.g. `"0.0.0.0:3000"`).
pub async fn serve<S: RecordStore + 'static>(
    store: Arc<S>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(store);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}

/// `GET /` — health text.
async fn root_handler() -> &'static str {
    "Hello, World!"
}

/// `GET /data` — all records as a JSON array, insertion order preserved.
async fn list_handler<S: RecordStore + 'static>(
    State(store): State<Arc<S>>,
) -> Result<Json<Vec<Record>>, ApiError> {
    Ok(Json(store.list_all()?))
}

/// `POST /data` — append the record. No uniqueness check, matching the
/// store contract.
async fn create_handler<S: RecordStore + 'static>(
    State(store): State<Arc<S>>,
    Json(record): Json<Record>,
) -> Result<(StatusCode, &'static str), ApiError> {
    store.save(record)?;
    Ok((StatusCode::CREATED, "Data added successfully"))
}

/// `GET /data/:id` — fetch a single record by id.
async fn find_handler<S: RecordStore + 'static>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<Json<Record>, ApiError> {
    let id = parse_id(&id)?;
    let record = store
        .find_by_id(id)?
        .ok_or(ApiError::NotFound("Data not found"))?;
    Ok(Json(record))
}

/// `PUT /data` — replace the record with a matching id.
///
/// Implemented as delete-then-insert: the updated record moves to the end
/// of the collection.
async fn update_handler<S: RecordStore + 'static>(
    State(store): State<Arc<S>>,
    Json(record): Json<Record>,
) -> Result<&'static str, ApiError> {
    let old = store
        .find_by_id(record.id)?
        .ok_or(ApiError::NotFound("Data to update not found"))?;
    store.delete(&old)?;
    store.save(record)?;
    Ok("Data updated successfully")
}

/// `DELETE /data/:id` — remove the record with a matching id.
async fn delete_handler<S: RecordStore + 'static>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError> {
    let id = parse_id(&id)?;
    let record = store
        .find_by_id(id)?
        .ok_or(ApiError::NotFound("Data to delete not found"))?;
    store.delete(&record)?;
    Ok("Data deleted successfully")
}

/// Parse a path segment as a record id. Non-numeric ids are a 400.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidId(raw.to_string()))
}
