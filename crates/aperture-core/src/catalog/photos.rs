//! Photo pairs and preview resolution for a single collection.

use serde::{Deserialize, Serialize};

use crate::namespace::{is_compressed_variant, is_preview_image};
use crate::{Error, ObjectRecord, PublicUrl, Result};

/// A half-resolution image paired with its full-resolution original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Public URL of the compressed variant.
    pub half_res_url: String,
    /// Public URL of the original image.
    pub full_res_url: String,
}

/// Error returned when a collection listing matched nothing.
pub(crate) fn empty_result(name: &str) -> Error {
    Error::not_found().with_message(format!("{name} returned 0 results"))
}

/// Derives the photo pairs of collection `name` from its listing.
///
/// An empty listing is [`ErrorKind::NotFound`]. A listing without
/// compressed variants yields an empty vector.
///
/// [`ErrorKind::NotFound`]: crate::ErrorKind::NotFound
pub fn list_photos(name: &str, records: &[ObjectRecord], urls: &PublicUrl) -> Result<Vec<Photo>> {
    if records.is_empty() {
        return Err(empty_result(name));
    }

    let photos = records
        .iter()
        .filter(|record| is_compressed_variant(&record.key))
        .map(|record| {
            let half_res_url = urls.to_public_url(&record.key);
            let full_res_url = urls.to_full_res_url(&half_res_url);
            Photo {
                half_res_url,
                full_res_url,
            }
        })
        .collect();

    Ok(photos)
}

/// Resolves the preview image URL of collection `name` from its listing.
///
/// Both an empty listing and a listing without a preview image are
/// [`ErrorKind::NotFound`].
///
/// [`ErrorKind::NotFound`]: crate::ErrorKind::NotFound
pub fn preview_url(name: &str, records: &[ObjectRecord], urls: &PublicUrl) -> Result<String> {
    records
        .iter()
        .find(|record| is_preview_image(&record.key))
        .map(|record| urls.to_public_url(&record.key))
        .ok_or_else(|| empty_result(name))
}
