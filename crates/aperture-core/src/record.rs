//! Object records as returned by the listing capability.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A single object stored in the bucket.
///
/// Records are produced by an [`ObjectListing`] and are never modified by
/// the catalog; every derived entity is recomputed from them per request.
///
/// [`ObjectListing`]: crate::ObjectListing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRecord {
    /// Full object key, `/`-delimited.
    pub key: String,
    /// Object size in bytes.
    pub size: u64,
    /// Last modification time, when the store reports one.
    pub last_modified: Option<Timestamp>,
}

impl ObjectRecord {
    /// Creates a record without a modification time.
    pub fn new(key: impl Into<String>, size: u64) -> Self {
        Self {
            key: key.into(),
            size,
            last_modified: None,
        }
    }

    /// Sets the modification time.
    pub fn with_last_modified(mut self, last_modified: Timestamp) -> Self {
        self.last_modified = Some(last_modified);
        self
    }

    /// Returns the key as a string slice.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }
}
