//! Record — the single entity stored by the service.

use serde::{Deserialize, Serialize};

/// A stored record: an integer id and a text payload.
///
/// The id is the lookup key for the find/update/delete operations. The store
/// does not enforce uniqueness; lookups act on the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub text: String,
}

impl Record {
    /// Create a new record.
    pub fn new(id: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}
