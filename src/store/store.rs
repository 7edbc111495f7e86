//! RecordStore - Abstract CRUD storage for records.

use crate::record::Record;

use super::StoreError;

/// Abstract CRUD storage for records.
pub trait RecordStore: Send + Sync {
    /// List all records, insertion order preserved. An empty store is valid.
    fn list_all(&self) -> Result<Vec<Record>, StoreError>;

    /// Append a record to the collection. No uniqueness check.
    fn save(&self, record: Record) -> Result<(), StoreError>;

    /// Get the first record with a matching id. Returns None if not found.
    fn find_by_id(&self, id: i64) -> Result<Option<Record>, StoreError>;

    /// Remove a record from the collection. Returns true if it existed.
    fn delete(&self, record: &Record) -> Result<bool, StoreError>;
}
