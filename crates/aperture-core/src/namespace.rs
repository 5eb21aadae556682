//! Key namespace conventions.
//!
//! Bucket keys are `/`-delimited paths whose shape alone carries the domain
//! meaning: a trailing slash marks a folder, a `-compressed` tag marks a
//! half-resolution variant, a `preview` tag marks the representative image
//! of a folder. All functions here are pure and never fail; malformed input
//! such as the empty string simply yields `false`.

/// Folder holding the singleton splash image. Never a collection.
pub const RESERVED_FOLDER: &str = "background/";

/// Listing prefix of the splash image inside [`RESERVED_FOLDER`].
pub const SPLASH_PREFIX: &str = "background/_";

/// Tag marking the half-resolution variant of an image.
pub const COMPRESSED_TAG: &str = "-compressed";

/// Tag marking the preview image of a folder.
pub const PREVIEW_TAG: &str = "preview";

/// Extension counted as an image for statistics (case-sensitive).
pub const IMAGE_EXTENSION: &str = ".JPG";

/// Sidecar document holding a collection description.
pub const DESCRIPTION_FILE: &str = "desc.json";

const DELIMITER: char = '/';

/// Returns `true` iff `key` ends with `/`.
#[inline]
pub fn is_folder_marker(key: &str) -> bool {
    key.ends_with(DELIMITER)
}

/// Returns `true` iff `key` is exactly the reserved splash folder.
#[inline]
pub fn is_reserved(key: &str) -> bool {
    key == RESERVED_FOLDER
}

/// Returns `true` iff `key` contains the compression tag.
#[inline]
pub fn is_compressed_variant(key: &str) -> bool {
    key.contains(COMPRESSED_TAG)
}

/// Returns `true` iff `key` contains the preview tag.
#[inline]
pub fn is_preview_tagged(key: &str) -> bool {
    key.contains(PREVIEW_TAG)
}

/// Returns `true` iff `key` ends with `.JPG`.
#[inline]
pub fn is_image_file(key: &str) -> bool {
    key.ends_with(IMAGE_EXTENSION)
}

/// Returns `true` iff `key` names a visible collection.
#[inline]
pub fn is_collection(key: &str) -> bool {
    is_folder_marker(key) && !is_reserved(key)
}

/// Returns `true` iff `key` is a preview image of its folder.
///
/// The folder marker itself never qualifies, even if its name contains
/// the preview tag.
#[inline]
pub fn is_preview_image(key: &str) -> bool {
    is_preview_tagged(key) && !is_folder_marker(key)
}

/// Removes exactly one trailing `/`, if present.
#[inline]
pub fn strip_trailing_slash(key: &str) -> &str {
    key.strip_suffix(DELIMITER).unwrap_or(key)
}

/// Normalizes a user-supplied path parameter so that `foo/` and `foo`
/// address the same collection.
#[inline]
pub fn strip_path_prefix(path: &str) -> &str {
    strip_trailing_slash(path)
}

/// Builds the listing prefix of a collection: `<name>/`.
pub fn folder_prefix(name: &str) -> String {
    format!("{name}{DELIMITER}")
}

/// Builds the key of a collection's description sidecar.
pub fn description_key(name: &str) -> String {
    format!("{name}{DELIMITER}{DESCRIPTION_FILE}")
}
