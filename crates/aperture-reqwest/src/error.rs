//! Internal error types for aperture-reqwest.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for aperture-reqwest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Internal error type for aperture-reqwest operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// Upstream answered with a non-success status.
    #[error("{url} responded with {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// Response status.
        status: StatusCode,
    },
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<Error> for aperture_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Reqwest(e) => {
                if e.is_timeout() {
                    aperture_core::Error::timeout()
                        .with_message(e.to_string())
                        .with_source(e)
                } else if e.is_decode() {
                    aperture_core::Error::serialization()
                        .with_message(e.to_string())
                        .with_source(e)
                } else if e.is_connect() {
                    aperture_core::Error::external_error()
                        .with_message("Connection failed")
                        .with_source(e)
                } else {
                    aperture_core::Error::external_error()
                        .with_message(e.to_string())
                        .with_source(e)
                }
            }
            Error::Status { url, status } => {
                let error = match status {
                    StatusCode::NOT_FOUND => aperture_core::Error::not_found(),
                    _ => aperture_core::Error::external_error(),
                };
                error.with_message(format!("{url} responded with {status}"))
            }
            Error::Serde(e) => aperture_core::Error::serialization()
                .with_message(e.to_string())
                .with_source(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use aperture_core::ErrorKind;

    use super::*;

    #[test]
    fn status_errors_are_classified() {
        let not_found = Error::Status {
            url: "https://cdn.example.com/x/desc.json".into(),
            status: StatusCode::NOT_FOUND,
        };
        let error: aperture_core::Error = not_found.into();
        assert_eq!(error.kind(), ErrorKind::NotFound);

        let forbidden = Error::Status {
            url: "https://cdn.example.com/x/desc.json".into(),
            status: StatusCode::FORBIDDEN,
        };
        let error: aperture_core::Error = forbidden.into();
        assert_eq!(error.kind(), ErrorKind::ExternalError);
        assert_eq!(
            error.message(),
            "https://cdn.example.com/x/desc.json responded with 403 Forbidden"
        );
    }

    #[test]
    fn invalid_json_is_serialization() {
        let serde = serde_json::from_slice::<serde_json::Value>(b"{").unwrap_err();
        let error: aperture_core::Error = Error::from(serde).into();
        assert_eq!(error.kind(), ErrorKind::Serialization);
    }
}
