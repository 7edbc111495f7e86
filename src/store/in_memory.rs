//! InMemoryRecordStore - Vec-backed record store.

use std::sync::{Arc, RwLock};

use crate::record::Record;

use super::{RecordStore, StoreError};

/// In-memory record store backed by a Vec.
///
/// The Vec keeps insertion order, which the list operation exposes.
/// Clone-friendly via Arc: clones share the same storage.
#[derive(Clone)]
pub struct InMemoryRecordStore {
    records: Arc<RwLock<Vec<Record>>>,
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRecordStore {
    /// Create a new empty record store.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl RecordStore for InMemoryRecordStore {
    fn list_all(&self) -> Result<Vec<Record>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;

        Ok(records.clone())
    }

    fn save(&self, record: Record) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;

        records.push(record);
        Ok(())
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Record>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;

        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    fn delete(&self, record: &Record) -> Result<bool, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;

        match records.iter().position(|r| r == record) {
            Some(index) => {
                records.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
