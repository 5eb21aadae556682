//! Sidecar description fetch capability.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::Result;

/// Tracing target for description fetches.
pub const TRACING_TARGET: &str = "aperture_core::description";

/// Type alias for a shared description provider.
pub type BoxedDescriptionProvider = Arc<dyn DescriptionProvider>;

/// Fetches a collection's `desc.json` sidecar document.
///
/// The document is opaque to the catalog and passed through unchanged.
#[async_trait::async_trait]
pub trait DescriptionProvider: Send + Sync {
    /// Retrieves and decodes the JSON document at `url`.
    ///
    /// A missing document is reported as [`ErrorKind::NotFound`].
    ///
    /// [`ErrorKind::NotFound`]: crate::ErrorKind::NotFound
    async fn fetch(&self, url: &str) -> Result<Value>;
}

/// Shared handle to a [`DescriptionProvider`].
#[derive(Clone)]
pub struct DescriptionService {
    inner: BoxedDescriptionProvider,
}

impl DescriptionService {
    /// Wraps a description provider.
    pub fn new<P>(provider: P) -> Self
    where
        P: DescriptionProvider + 'static,
    {
        Self {
            inner: Arc::new(provider),
        }
    }

    /// Fetches the document at `url`.
    pub async fn fetch(&self, url: &str) -> Result<Value> {
        tracing::debug!(target: TRACING_TARGET, url, "Fetching description");
        self.inner.fetch(url).await
    }
}

impl fmt::Debug for DescriptionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescriptionService").finish_non_exhaustive()
    }
}
