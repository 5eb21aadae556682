//! Mapping of catalog errors to HTTP errors.

use aperture_core::ErrorKind as CoreErrorKind;

use crate::handler::{Error, ErrorKind};

/// Tracing target for catalog error mapping.
const TRACING_TARGET: &str = "aperture_server::handler::error::core";

impl From<aperture_core::Error> for Error<'static> {
    fn from(error: aperture_core::Error) -> Self {
        match error.kind() {
            CoreErrorKind::NotFound => ErrorKind::NotFound
                .with_message(format!("404: {}", error.message()))
                .with_context(error.to_string()),
            CoreErrorKind::InvariantViolation => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %error,
                    "Bucket invariant violated",
                );

                ErrorKind::InternalServerError
                    .with_message(error.message().to_owned())
                    .with_context(error.to_string())
            }
            _ => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    kind = error.kind_str(),
                    error = %error,
                    source = ?std::error::Error::source(&error),
                    "Upstream call failed",
                );

                ErrorKind::InternalServerError
                    .with_message(error.message().to_owned())
                    .with_context(error.to_string())
            }
        }
    }
}
