//! Key listing capability.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::{ObjectRecord, Result};

/// Tracing target for listing operations.
pub const TRACING_TARGET: &str = "aperture_core::listing";

/// Type alias for a shared listing provider.
pub type BoxedObjectListing = Arc<dyn ObjectListing>;

/// Lists object records stored in the bucket.
///
/// Implementations must return the complete set of matching records,
/// exhausting any pagination internally, in the store's listing order.
#[async_trait::async_trait]
pub trait ObjectListing: Send + Sync {
    /// Lists every record whose key starts with `prefix`.
    ///
    /// `None` lists the whole bucket. The prefix is a plain string prefix,
    /// so `background/_` matches `background/_splash.JPG`. Folder markers
    /// are returned with their trailing slash.
    async fn list(&self, prefix: Option<&str>) -> Result<Vec<ObjectRecord>>;
}

/// Shared handle to an [`ObjectListing`] with request logging.
#[derive(Clone)]
pub struct ListingService {
    inner: BoxedObjectListing,
}

impl ListingService {
    /// Wraps a listing provider.
    pub fn new<P>(provider: P) -> Self
    where
        P: ObjectListing + 'static,
    {
        Self {
            inner: Arc::new(provider),
        }
    }

    /// Lists records under `prefix`, logging the outcome.
    pub async fn list(&self, prefix: Option<&str>) -> Result<Vec<ObjectRecord>> {
        let started = Instant::now();
        let result = self.inner.list(prefix).await;

        match &result {
            Ok(records) => tracing::debug!(
                target: TRACING_TARGET,
                prefix = prefix.unwrap_or_default(),
                records = records.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Listed objects",
            ),
            Err(error) => tracing::warn!(
                target: TRACING_TARGET,
                prefix = prefix.unwrap_or_default(),
                error = %error,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Object listing failed",
            ),
        }

        result
    }
}

impl fmt::Debug for ListingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListingService").finish_non_exhaustive()
    }
}
