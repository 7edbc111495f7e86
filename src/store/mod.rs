//! Record storage — the capability interface and its in-memory implementation.
//!
//! The store holds every `Record` for the process lifetime. Consumers depend
//! on the `RecordStore` trait, so tests can swap in their own implementation.
//!
//! ## Example
//!
//! ```ignore
//! use record_service::{InMemoryRecordStore, Record, RecordStore};
//!
//! let store = InMemoryRecordStore::new();
//! store.save(Record::new(1, "aaa"))?;
//! let found = store.find_by_id(1)?;
//! ```

mod in_memory;
mod store;

use std::fmt;

/// Error type for record store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A lock guarding the collection was poisoned.
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}

pub use in_memory::InMemoryRecordStore;
pub use store::RecordStore;
