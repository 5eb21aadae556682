//! Catalog response types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A visible collection.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Collection {
    /// Folder name without its trailing slash.
    #[serde(rename = "Key")]
    pub key: String,
    /// Modification date formatted as `<Month> <day>, <year>`.
    #[serde(rename = "LastModified")]
    pub last_modified: Option<String>,
}

impl From<aperture_core::Collection> for Collection {
    fn from(collection: aperture_core::Collection) -> Self {
        Self {
            key: collection.name,
            last_modified: collection.last_modified,
        }
    }
}

/// Response for listing collections.
pub type Collections = Vec<Collection>;

/// A half and full resolution URL pair.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Photo {
    /// Public URL of the compressed variant.
    #[serde(rename = "halfurl")]
    pub half_url: String,
    /// Public URL of the original image.
    #[serde(rename = "fullurl")]
    pub full_url: String,
}

impl From<aperture_core::Photo> for Photo {
    fn from(photo: aperture_core::Photo) -> Self {
        Self {
            half_url: photo.half_res_url,
            full_url: photo.full_res_url,
        }
    }
}

/// Response for listing the photos of a collection.
pub type Photos = Vec<Photo>;

/// A single public image URL.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ImageUrl {
    /// Public URL of the image.
    #[serde(rename = "URL")]
    pub url: String,
}

impl From<String> for ImageUrl {
    fn from(url: String) -> Self {
        Self { url }
    }
}

/// Bucket-wide statistics.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Number of `.JPG` objects.
    pub image_count: usize,
    /// Total image size in MiB with two decimals.
    #[serde(rename = "storageMiB")]
    pub storage_mib: String,
    /// Total image size in GiB with two decimals.
    #[serde(rename = "storageGiB")]
    pub storage_gib: String,
    /// Number of visible collections.
    pub collection_count: usize,
}

impl From<aperture_core::Stats> for Stats {
    fn from(stats: aperture_core::Stats) -> Self {
        Self {
            image_count: stats.image_count,
            storage_mib: stats.storage_mib,
            storage_gib: stats.storage_gib,
            collection_count: stats.collection_count,
        }
    }
}
