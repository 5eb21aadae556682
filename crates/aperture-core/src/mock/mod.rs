//! In-memory implementations of the listing and description capabilities.
//!
//! This module is only available when the `test-utils` feature is enabled:
//!
//! ```toml
//! [dev-dependencies]
//! aperture-core = { version = "...", features = ["test-utils"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use aperture_core::mock::{MockDescription, MockListing};
//! use aperture_core::ObjectRecord;
//!
//! let listing = MockListing::new(vec![ObjectRecord::new("x/", 0)]);
//! let description = MockDescription::default();
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::{DescriptionProvider, Error, ObjectListing, ObjectRecord, Result};

/// In-memory bucket listing.
///
/// Records are returned in insertion order, filtered by plain string prefix.
#[derive(Debug, Clone, Default)]
pub struct MockListing {
    records: Arc<Vec<ObjectRecord>>,
    failure: Option<String>,
}

impl MockListing {
    /// Creates a listing over `records`.
    pub fn new(records: Vec<ObjectRecord>) -> Self {
        Self {
            records: Arc::new(records),
            failure: None,
        }
    }

    /// Creates a listing over records of the given keys, each one byte.
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self::new(keys.into_iter().map(|key| ObjectRecord::new(key, 1)).collect())
    }

    /// Creates a listing whose every call fails with an external error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            records: Arc::default(),
            failure: Some(message.into()),
        }
    }
}

#[async_trait::async_trait]
impl ObjectListing for MockListing {
    async fn list(&self, prefix: Option<&str>) -> Result<Vec<ObjectRecord>> {
        if let Some(message) = &self.failure {
            return Err(Error::external_error().with_message(message.clone()));
        }

        let prefix = prefix.unwrap_or_default();
        Ok(self
            .records
            .iter()
            .filter(|record| record.key.starts_with(prefix))
            .cloned()
            .collect())
    }
}

/// In-memory description documents keyed by URL.
///
/// Unknown URLs are reported as not found.
#[derive(Debug, Clone, Default)]
pub struct MockDescription {
    documents: HashMap<String, Value>,
    failure: Option<String>,
}

impl MockDescription {
    /// Registers `document` at `url`.
    pub fn with_document(mut self, url: impl Into<String>, document: Value) -> Self {
        self.documents.insert(url.into(), document);
        self
    }

    /// Creates a provider whose every call fails with an external error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            documents: HashMap::new(),
            failure: Some(message.into()),
        }
    }
}

#[async_trait::async_trait]
impl DescriptionProvider for MockDescription {
    async fn fetch(&self, url: &str) -> Result<Value> {
        if let Some(message) = &self.failure {
            return Err(Error::external_error().with_message(message.clone()));
        }

        self.documents
            .get(url)
            .cloned()
            .ok_or_else(|| Error::not_found().with_message(format!("{url} not found")))
    }
}
