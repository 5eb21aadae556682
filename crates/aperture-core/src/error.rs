//! Common error type definitions.

use strum::{AsRefStr, IntoStaticStr};
use thiserror::Error;

/// Type alias for boxed dynamic errors that can be sent across threads.
///
/// Used as the source of [`Error`] so that store and HTTP client failures
/// keep their original cause while crossing crate boundaries.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Type alias for Results with our custom Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Categories of errors that can occur while deriving the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// A scoped listing or sidecar lookup matched nothing.
    NotFound,
    /// The bucket layout breaks an operator-guaranteed invariant.
    InvariantViolation,
    /// The object store or the sidecar host returned an error.
    ExternalError,
    /// A store or HTTP call did not complete in time.
    Timeout,
    /// A sidecar document could not be decoded.
    Serialization,
    /// A client was configured with unusable values.
    Configuration,
}

/// A structured error type for catalog operations.
#[derive(Debug, Error)]
#[error("{kind:?}{}", message.as_ref().map(|m| format!(": {}", m)).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional error message.
    pub message: Option<String>,
    /// Optional source error.
    #[source]
    pub source: Option<BoxedError>,
}

impl Error {
    /// Creates a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            source: None,
        }
    }

    /// Adds a message to this error.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Adds a source error to this error.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Creates a new not found error.
    pub fn not_found() -> Self {
        Self::new(ErrorKind::NotFound)
    }

    /// Creates a new invariant violation error.
    pub fn invariant_violation() -> Self {
        Self::new(ErrorKind::InvariantViolation)
    }

    /// Creates a new external error.
    pub fn external_error() -> Self {
        Self::new(ErrorKind::ExternalError)
    }

    /// Creates a new timeout error.
    pub fn timeout() -> Self {
        Self::new(ErrorKind::Timeout)
    }

    /// Creates a new serialization error.
    pub fn serialization() -> Self {
        Self::new(ErrorKind::Serialization)
    }

    /// Creates a new configuration error.
    pub fn configuration() -> Self {
        Self::new(ErrorKind::Configuration)
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error kind as a string.
    pub fn kind_str(&self) -> &'static str {
        self.kind.into()
    }

    /// Returns the message, falling back to the kind name.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_else(|| self.kind.as_ref())
    }

    /// Returns whether the error reports an empty scoped result.
    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let error = Error::not_found().with_message("x returned 0 results");
        assert_eq!(error.to_string(), "NotFound: x returned 0 results");
    }

    #[test]
    fn display_without_message() {
        let error = Error::timeout();
        assert_eq!(error.to_string(), "Timeout");
        assert_eq!(error.message(), "timeout");
    }

    #[test]
    fn kind_str_is_snake_case() {
        assert_eq!(Error::invariant_violation().kind_str(), "invariant_violation");
        assert_eq!(Error::external_error().kind_str(), "external_error");
    }

    #[test]
    fn source_is_preserved() {
        let io = std::io::Error::other("connection reset");
        let error = Error::external_error().with_source(io);
        assert!(std::error::Error::source(&error).is_some());
        assert!(!error.is_not_found());
    }
}
