//! Catalog derivations.
//!
//! Every entity is recomputed from the object store on each call; the
//! catalog keeps no domain state between requests. Each operation issues
//! exactly one listing or one description fetch.

mod collections;
mod photos;
mod splash;
mod stats;

pub use collections::{Collection, format_display_date, list_collections};
pub use photos::{Photo, list_photos, preview_url};
pub use splash::splash_url;
pub use stats::{Stats, compute_stats};

use serde_json::Value;

use crate::namespace::{SPLASH_PREFIX, description_key, folder_prefix, strip_path_prefix};
use crate::{DescriptionService, ListingService, PublicUrl, Result};

/// Tracing target for catalog operations.
pub const TRACING_TARGET: &str = "aperture_core::catalog";

/// Read-only view of the photography catalog stored in the bucket.
#[derive(Debug, Clone)]
pub struct Catalog {
    listing: ListingService,
    descriptions: DescriptionService,
    urls: PublicUrl,
}

impl Catalog {
    /// Creates a catalog over the given capabilities.
    pub fn new(listing: ListingService, descriptions: DescriptionService, urls: PublicUrl) -> Self {
        Self {
            listing,
            descriptions,
            urls,
        }
    }

    /// Returns the public URL formatter.
    pub fn urls(&self) -> &PublicUrl {
        &self.urls
    }

    /// Lists visible collections.
    pub async fn collections(&self) -> Result<Vec<Collection>> {
        let records = self.listing.list(None).await?;
        let collections = list_collections(&records);

        tracing::debug!(
            target: TRACING_TARGET,
            collections = collections.len(),
            "Derived collections",
        );

        Ok(collections)
    }

    /// Lists the photo pairs of collection `key`.
    ///
    /// `key` may carry one trailing slash.
    pub async fn photos(&self, key: &str) -> Result<Vec<Photo>> {
        let name = strip_path_prefix(key);
        let records = self.listing.list(Some(&folder_prefix(name))).await?;
        let photos = list_photos(name, &records, &self.urls)?;

        tracing::debug!(
            target: TRACING_TARGET,
            collection = name,
            photos = photos.len(),
            "Derived photos",
        );

        Ok(photos)
    }

    /// Resolves the preview image URL of collection `key`.
    pub async fn preview(&self, key: &str) -> Result<String> {
        let name = strip_path_prefix(key);
        let records = self.listing.list(Some(&folder_prefix(name))).await?;
        preview_url(name, &records, &self.urls)
    }

    /// Fetches the `desc.json` sidecar of collection `key`.
    pub async fn description(&self, key: &str) -> Result<Value> {
        let name = strip_path_prefix(key);
        let sidecar = description_key(name);
        let url = self.urls.to_public_url(&sidecar);

        self.descriptions.fetch(&url).await.map_err(|error| {
            if error.is_not_found() {
                error.with_message(format!("{sidecar} returned 0 results"))
            } else {
                error
            }
        })
    }

    /// Resolves the splash image URL.
    pub async fn splash(&self) -> Result<String> {
        let records = self.listing.list(Some(SPLASH_PREFIX)).await?;
        splash_url(&records, &self.urls)
    }

    /// Computes bucket-wide statistics from an unscoped listing.
    pub async fn stats(&self) -> Result<Stats> {
        let records = self.listing.list(None).await?;
        let stats = compute_stats(&records);

        tracing::debug!(
            target: TRACING_TARGET,
            records = records.len(),
            images = stats.image_count,
            collections = stats.collection_count,
            "Computed stats",
        );

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ObjectRecord;
    use crate::mock::{MockDescription, MockListing};

    fn catalog(listing: MockListing, description: MockDescription) -> Catalog {
        Catalog::new(
            ListingService::new(listing),
            DescriptionService::new(description),
            PublicUrl::with_base("https://cdn.example.com").unwrap(),
        )
    }

    fn bucket() -> MockListing {
        MockListing::new(vec![
            ObjectRecord::new("background/", 0),
            ObjectRecord::new("background/_splash.JPG", 4096),
            ObjectRecord::new("x/", 0),
            ObjectRecord::new("x/_1-compressed.JPG", 100),
            ObjectRecord::new("x/_1.JPG", 1000),
            ObjectRecord::new("x/_2-preview-compressed.JPG", 100),
            ObjectRecord::new("x/desc.json", 10),
            ObjectRecord::new("xy/", 0),
        ])
    }

    #[tokio::test]
    async fn trailing_slash_is_equivalent() {
        let catalog = catalog(bucket(), MockDescription::default());
        let plain = catalog.photos("x").await.unwrap();
        let slashed = catalog.photos("x/").await.unwrap();
        assert_eq!(plain, slashed);
        assert_eq!(plain.len(), 2);

        let error = catalog.photos("x//").await.unwrap_err();
        assert_eq!(error.message(), "x/ returned 0 results");
    }

    #[tokio::test]
    async fn photos_do_not_leak_sibling_prefixes() {
        let catalog = catalog(bucket(), MockDescription::default());
        assert!(catalog.photos("xy").await.unwrap().is_empty());
        assert!(catalog.photos("missing").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn repeated_calls_are_identical() {
        let catalog = catalog(bucket(), MockDescription::default());
        let first = serde_json::to_string(&catalog.stats().await.unwrap()).unwrap();
        let second = serde_json::to_string(&catalog.stats().await.unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn splash_and_preview() {
        let catalog = catalog(bucket(), MockDescription::default());
        assert_eq!(
            catalog.splash().await.unwrap(),
            "https://cdn.example.com/background/_splash.JPG"
        );
        assert_eq!(
            catalog.preview("x").await.unwrap(),
            "https://cdn.example.com/x/_2-preview-compressed.JPG"
        );
    }

    #[tokio::test]
    async fn description_uses_sidecar_url() {
        let description = MockDescription::default()
            .with_document("https://cdn.example.com/x/desc.json", serde_json::json!({"title": "X"}));
        let catalog = catalog(bucket(), description);

        assert_eq!(catalog.description("x/").await.unwrap()["title"], "X");

        let error = catalog.description("y").await.unwrap_err();
        assert_eq!(error.message(), "y/desc.json returned 0 results");
    }

    #[tokio::test]
    async fn listing_failure_propagates() {
        let catalog = catalog(MockListing::failing("access denied"), MockDescription::default());
        let error = catalog.collections().await.unwrap_err();
        assert_eq!(error.kind(), crate::ErrorKind::ExternalError);
    }
}
