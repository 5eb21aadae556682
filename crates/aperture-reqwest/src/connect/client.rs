//! Reqwest-based HTTP client for description sidecars.

use std::sync::Arc;
use std::time::Instant;

use aperture_core::{DescriptionProvider, DescriptionService};
use reqwest::Client;
use serde_json::Value;

use super::ReqwestConfig;
use crate::error::{Error, Result};

/// Tracing target for reqwest client operations.
pub const TRACING_TARGET: &str = "aperture_reqwest::client";

/// Inner client that holds the HTTP client and configuration.
struct ReqwestClientInner {
    http: Client,
    config: ReqwestConfig,
}

/// Reqwest-based HTTP client fetching `desc.json` sidecar documents.
///
/// This client implements the [`DescriptionProvider`] trait.
///
/// # Examples
///
/// ```rust,ignore
/// use aperture_reqwest::{ReqwestClient, ReqwestConfig};
///
/// let client = ReqwestClient::new(ReqwestConfig::default())?;
/// let document = client.get_json("https://cdn.example.com/x/desc.json").await?;
/// ```
#[derive(Clone)]
pub struct ReqwestClient {
    inner: Arc<ReqwestClientInner>,
}

impl std::fmt::Debug for ReqwestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl ReqwestClient {
    /// Creates a new reqwest client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: ReqwestConfig) -> Result<Self> {
        let timeout = config.effective_timeout();
        let user_agent = config.effective_user_agent();

        tracing::debug!(
            target: TRACING_TARGET,
            timeout_ms = timeout.as_millis() as u64,
            user_agent = %user_agent,
            "Creating reqwest client"
        );

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(&user_agent)
            .build()?;

        let inner = ReqwestClientInner { http, config };
        let client = Self {
            inner: Arc::new(inner),
        };

        tracing::info!(
            target: TRACING_TARGET,
            "Reqwest client created successfully"
        );

        Ok(client)
    }

    /// Gets the client configuration.
    pub fn config(&self) -> &ReqwestConfig {
        &self.inner.config
    }

    /// Converts this client into a [`DescriptionService`] for use with dependency injection.
    pub fn into_service(self) -> DescriptionService {
        DescriptionService::new(self)
    }

    /// Fetches `url` and decodes the body as JSON.
    pub async fn get_json(&self, url: &str) -> Result<Value> {
        let started_at = Instant::now();
        let response = self.inner.http.get(url).send().await?;
        let status = response.status();

        tracing::debug!(
            target: TRACING_TARGET,
            url = %url,
            status_code = status.as_u16(),
            elapsed_ms = started_at.elapsed().as_millis() as u64,
            "Sidecar request completed"
        );

        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_owned(),
                status,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait::async_trait]
impl DescriptionProvider for ReqwestClient {
    async fn fetch(&self, url: &str) -> aperture_core::Result<Value> {
        self.get_json(url).await.map_err(|err| {
            tracing::warn!(
                target: TRACING_TARGET,
                url = %url,
                error = %err,
                "Sidecar fetch failed"
            );
            err.into()
        })
    }
}

#[cfg(test)]
mod tests {
    use aperture_core::ErrorKind;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;

    use super::*;

    async fn serve() -> String {
        let router = Router::new()
            .route(
                "/x/desc.json",
                get(|| async { r#"{"title":"Lakes","year":2021}"# }),
            )
            .route("/broken/desc.json", get(|| async { "{not json" }))
            .route(
                "/private/desc.json",
                get(|| async { (StatusCode::FORBIDDEN, "denied") }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await });

        format!("http://{addr}")
    }

    fn client() -> ReqwestClient {
        ReqwestClient::new(ReqwestConfig::default()).unwrap()
    }

    #[test]
    fn client_creation() {
        let client = client();
        assert!(client.config().user_agent.is_none());
    }

    #[tokio::test]
    async fn fetch_passes_document_through() {
        let base = serve().await;
        let document = client().fetch(&format!("{base}/x/desc.json")).await.unwrap();
        assert_eq!(document["title"], "Lakes");
        assert_eq!(document["year"], 2021);
    }

    #[tokio::test]
    async fn fetch_maps_upstream_failures() {
        let base = serve().await;
        let client = client();

        let missing = client.fetch(&format!("{base}/y/desc.json")).await.unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::NotFound);

        let broken = client.fetch(&format!("{base}/broken/desc.json")).await.unwrap_err();
        assert_eq!(broken.kind(), ErrorKind::Serialization);

        let private = client.fetch(&format!("{base}/private/desc.json")).await.unwrap_err();
        assert_eq!(private.kind(), ErrorKind::ExternalError);
    }
}
