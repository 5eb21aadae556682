//! Public URL synthesis for bucket keys.

use crate::namespace::COMPRESSED_TAG;
use crate::{Error, Result};

/// Maps bucket keys to publicly addressable URLs.
///
/// Formatting is pure template substitution: no network access and no
/// check that the object exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicUrl {
    base: String,
}

impl PublicUrl {
    /// Creates a formatter using path-style S3 addressing:
    /// `https://s3.<region>.amazonaws.com/<bucket>/<key>`.
    pub fn new(region: &str, bucket: &str) -> Result<Self> {
        if region.is_empty() || bucket.is_empty() {
            return Err(Error::configuration()
                .with_message("region and bucket must not be empty"));
        }

        Ok(Self {
            base: format!("https://s3.{region}.amazonaws.com/{bucket}"),
        })
    }

    /// Creates a formatter with an explicit base, producing `<base>/<key>`.
    ///
    /// Trailing slashes of `base` are ignored.
    pub fn with_base(base: impl AsRef<str>) -> Result<Self> {
        let base = base.as_ref().trim_end_matches('/');
        if base.is_empty() {
            return Err(Error::configuration().with_message("public URL base must not be empty"));
        }

        Ok(Self {
            base: base.to_owned(),
        })
    }

    /// Returns the configured base without a trailing slash.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Returns the public URL of `key`.
    pub fn to_public_url(&self, key: &str) -> String {
        format!("{}/{key}", self.base)
    }

    /// Removes the first compression tag from the key portion of a URL
    /// produced by [`Self::to_public_url`].
    ///
    /// URLs not starting with the configured base are rewritten as a whole.
    pub fn to_full_res_url(&self, half_res_url: &str) -> String {
        match half_res_url
            .strip_prefix(self.base.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
        {
            Some(key) => self.to_public_url(&key.replacen(COMPRESSED_TAG, "", 1)),
            None => half_res_url.replacen(COMPRESSED_TAG, "", 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatter() -> PublicUrl {
        PublicUrl::new("eu-west-2", "photos").unwrap()
    }

    #[test]
    fn path_style_template() {
        assert_eq!(
            formatter().to_public_url("x/_1.JPG"),
            "https://s3.eu-west-2.amazonaws.com/photos/x/_1.JPG"
        );
    }

    #[test]
    fn explicit_base() {
        let url = PublicUrl::with_base("https://cdn.example.com/").unwrap();
        assert_eq!(url.base(), "https://cdn.example.com");
        assert_eq!(url.to_public_url("a/b.JPG"), "https://cdn.example.com/a/b.JPG");
    }

    #[test]
    fn empty_configuration_is_rejected() {
        assert!(PublicUrl::new("", "photos").is_err());
        assert!(PublicUrl::new("eu-west-2", "").is_err());
        assert!(PublicUrl::with_base("/").is_err());
    }

    #[test]
    fn full_res_strips_tag_at_any_position() {
        let url = formatter();
        for key in [
            "x/_1-compressed.JPG",
            "x/-compressed_1.JPG",
            "x-compressed/_1.JPG",
        ] {
            let expected = url.to_public_url(&key.replacen("-compressed", "", 1));
            assert_eq!(url.to_full_res_url(&url.to_public_url(key)), expected);
        }
    }

    #[test]
    fn full_res_never_rewrites_base() {
        let url = PublicUrl::with_base("https://cdn-compressed.example.com").unwrap();
        let half = url.to_public_url("x/_1-compressed.JPG");
        assert_eq!(
            url.to_full_res_url(&half),
            "https://cdn-compressed.example.com/x/_1.JPG"
        );
    }
}
