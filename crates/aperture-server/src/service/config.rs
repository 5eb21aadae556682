use aperture_core::{DescriptionService, ListingService, PublicUrl};
use aperture_opendal::{S3Config, StorageBackend, StorageError};
use aperture_reqwest::{ReqwestClient, ReqwestConfig};
#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::service::{Result, ServiceError, TRACING_TARGET};

/// App [`state`] configuration.
///
/// [`state`]: crate::service::ServiceState
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct ServiceConfig {
    /// Object store holding the catalog.
    #[cfg_attr(feature = "config", command(flatten))]
    pub storage: S3Config,

    /// HTTP client fetching `desc.json` sidecars.
    #[cfg_attr(feature = "config", command(flatten))]
    #[serde(default)]
    pub http: ReqwestConfig,

    /// Base of public object URLs, e.g. a CDN or virtual-hosted bucket URL.
    ///
    /// Defaults to `https://s3.<region>.amazonaws.com/<bucket>`.
    #[cfg_attr(
        feature = "config",
        arg(long = "public-url-base", env = "PUBLIC_URL_BASE")
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_url_base: Option<String>,
}

impl ServiceConfig {
    /// Creates a configuration for the given object store.
    pub fn new(storage: S3Config) -> Self {
        Self {
            storage,
            http: ReqwestConfig::default(),
            public_url_base: None,
        }
    }

    /// Overrides the base of public object URLs.
    pub fn with_public_url_base(mut self, base: impl Into<String>) -> Self {
        self.public_url_base = Some(base.into());
        self
    }

    /// Validates the configuration without connecting anywhere.
    pub fn validate(&self) -> Result<()> {
        self.storage
            .validate()
            .map_err(|e| ServiceError::config("invalid object store configuration").with_source(e))?;
        self.public_url()?;
        Ok(())
    }

    /// Builds the public URL formatter.
    ///
    /// Precedence: `PUBLIC_URL_BASE`, then `<S3_ENDPOINT>/<bucket>` for
    /// S3-compatible stores, then the path-style AWS template.
    pub fn public_url(&self) -> Result<PublicUrl> {
        let urls = match (self.public_url_base.as_deref(), self.storage.endpoint.as_deref()) {
            (Some(base), _) => PublicUrl::with_base(base),
            (None, Some(endpoint)) => PublicUrl::with_base(format!(
                "{}/{}",
                endpoint.trim_end_matches('/'),
                self.storage.bucket
            )),
            (None, None) => PublicUrl::new(&self.storage.region, &self.storage.bucket),
        };

        urls.map_err(|e| ServiceError::config("invalid public URL configuration").with_source(e))
    }

    /// Creates the object store listing client.
    pub fn connect_storage(&self) -> Result<ListingService> {
        let backend = StorageBackend::new(self.storage.clone()).map_err(|e| match e {
            StorageError::Init(_) => {
                ServiceError::config("failed to initialize object store").with_source(e)
            }
            _ => ServiceError::external("s3", "failed to create object store client").with_source(e),
        })?;

        Ok(ListingService::new(backend))
    }

    /// Creates the sidecar description client.
    pub fn create_http_client(&self) -> Result<DescriptionService> {
        let client = ReqwestClient::new(self.http.clone()).map_err(|e| {
            ServiceError::external("http", "failed to create HTTP client").with_source(e)
        })?;

        tracing::debug!(
            target: TRACING_TARGET,
            timeout_secs = client.config().effective_timeout().as_secs(),
            "Description client created",
        );

        Ok(client.into_service())
    }
}
