//! record-service — serves the HTTP CRUD API over an in-memory store.

use std::sync::Arc;

use clap::Parser;
use tracing::info;

use record_service::{api, InMemoryRecordStore};

#[derive(Parser, Debug)]
#[command(name = "record-service")]
#[command(about = "Minimal HTTP CRUD service over an in-memory record store")]
struct Args {
    /// Bind address
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Server port
    #[arg(short, long, default_value = "3000")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let args = Args::parse();

    tracing_subscriber::fmt().init();

    let store = Arc::new(InMemoryRecordStore::new());

    let addr = format!("{}:{}", args.host, args.port);
    info!("starting record service on {}", addr);
    api::serve(store, &addr).await
}
