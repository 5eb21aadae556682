//! Application state and dependency injection.

use aperture_core::Catalog;

use crate::service::{Result, ServiceConfig, TRACING_TARGET};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Debug, Clone)]
pub struct ServiceState {
    catalog: Catalog,
}

impl ServiceState {
    /// Initializes application state from configuration.
    ///
    /// Creates the object store and sidecar clients exactly once.
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        config.validate()?;

        let urls = config.public_url()?;
        let listing = config.connect_storage()?;
        let descriptions = config.create_http_client()?;

        tracing::info!(
            target: TRACING_TARGET,
            bucket = %config.storage.bucket,
            region = %config.storage.region,
            public_url_base = urls.base(),
            "Service state initialized",
        );

        Ok(Self::from_catalog(Catalog::new(listing, descriptions, urls)))
    }

    /// Creates application state over an existing catalog.
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(catalog: Catalog);
