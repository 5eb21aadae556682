//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! # Usage Example
//!
//! ```rust,no_run
//! use aperture_server::handler::{fallback, routes};
//! use aperture_server::middleware::{OpenApiConfig, RouterOpenApiExt};
//! use aperture_server::service::{ServiceConfig, ServiceState};
//!
//! # fn example(config: ServiceConfig) -> anyhow::Result<()> {
//! let state = ServiceState::from_config(&config)?;
//! let router: axum::Router = routes()
//!     .with_open_api(OpenApiConfig::default())
//!     .fallback(fallback)
//!     .with_state(state);
//! # Ok(())
//! # }
//! ```
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod collections;
mod error;
mod monitors;
mod request;
mod response;
mod splash;
mod stats;

use aide::axum::ApiRouter;
use axum::http::Uri;

pub use crate::handler::error::{Error, ErrorKind, Result};
pub use crate::handler::request::CollectionPathParams;
pub use crate::handler::response::{
    Collection, Collections, ErrorResponse, ImageUrl, MonitorStatus, Photo, Photos,
    ServiceStatus, Stats,
};
use crate::service::ServiceState;

/// Answers unmatched routes with 404 `{ERR}`.
pub async fn fallback(uri: Uri) -> Error<'static> {
    ErrorKind::NotFound.with_context(format!("no route for {uri}"))
}

/// Returns an [`ApiRouter`] with all routes.
pub fn routes() -> ApiRouter<ServiceState> {
    ApiRouter::new()
        .merge(splash::routes())
        .merge(collections::routes())
        .merge(stats::routes())
        .merge(monitors::routes())
}

#[cfg(test)]
pub(crate) mod test {
    use aperture_core::mock::{MockDescription, MockListing};
    use aperture_core::{Catalog, DescriptionService, ListingService, ObjectRecord, PublicUrl};
    use axum_test::TestServer;
    use jiff::Timestamp;

    use crate::handler::{fallback, routes};
    use crate::middleware::{OpenApiConfig, RouterOpenApiExt};
    use crate::service::ServiceState;

    /// Public URL base of test catalogs.
    pub const BASE: &str = "https://cdn.example.com";

    /// Returns a bucket with a splash image and two collections.
    pub fn bucket() -> MockListing {
        let updated_at: Timestamp = "2026-10-19T12:00:00Z".parse().unwrap();

        MockListing::new(vec![
            ObjectRecord::new("background/", 0),
            ObjectRecord::new("background/_splash.JPG", 4096),
            ObjectRecord::new("landscapes/", 0).with_last_modified(updated_at),
            ObjectRecord::new("landscapes/_1-compressed.JPG", 100),
            ObjectRecord::new("landscapes/_1.JPG", 1000),
            ObjectRecord::new("landscapes/_2-preview-compressed.JPG", 100),
            ObjectRecord::new("landscapes/_2-preview.JPG", 1000),
            ObjectRecord::new("landscapes/desc.json", 10),
            ObjectRecord::new("portraits/", 0),
            ObjectRecord::new("portraits/_3.JPG", 2048),
        ])
    }

    /// Returns a new [`TestServer`] over the given capabilities.
    pub fn create_test_server_with(
        listing: MockListing,
        description: MockDescription,
    ) -> anyhow::Result<TestServer> {
        let catalog = Catalog::new(
            ListingService::new(listing),
            DescriptionService::new(description),
            PublicUrl::with_base(BASE)?,
        );

        let router = routes()
            .with_open_api(OpenApiConfig::default())
            .fallback(fallback)
            .with_state(ServiceState::from_catalog(catalog));

        let server = TestServer::new(router)?;
        Ok(server)
    }

    /// Returns a new [`TestServer`] over [`bucket`].
    pub fn create_test_server() -> anyhow::Result<TestServer> {
        create_test_server_with(bucket(), MockDescription::default())
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/collections").await;
        response.assert_status_not_found();
        response.assert_json(&serde_json::json!({ "ERR": "404: resource not found" }));

        Ok(())
    }

    #[tokio::test]
    async fn open_api_document_lists_routes() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/api/openapi.json").await;
        response.assert_status_ok();

        let document = response.json::<serde_json::Value>();
        let paths = &document["paths"];
        for path in [
            "/splash-image",
            "/collection-names",
            "/collection-description/{key}",
            "/collection-contents/{key}",
            "/collection-preview/{key}",
            "/S3-server-stats",
            "/health",
        ] {
            assert!(paths.get(path).is_some(), "{path} is undocumented");
        }

        Ok(())
    }
}
