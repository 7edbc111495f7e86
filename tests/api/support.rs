//! Test support: seed data and server bootstrap.

use std::sync::Arc;

use record_service::{api, InMemoryRecordStore, Record, RecordStore};

/// Store seeded with three records: `{1,"aaa"}, {2,"bbb"}, {3,"ccc"}`.
pub fn seeded_store() -> Arc<InMemoryRecordStore> {
    let store = InMemoryRecordStore::new();
    for record in [
        Record::new(1, "aaa"),
        Record::new(2, "bbb"),
        Record::new(3, "ccc"),
    ] {
        store.save(record).unwrap();
    }
    Arc::new(store)
}

/// Bind to port 0 and return the actual base URL.
pub async fn start_server(store: Arc<InMemoryRecordStore>) -> String {
    let app = api::router(store);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}
