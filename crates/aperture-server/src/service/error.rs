//! Service layer error types.
//!
//! These errors only occur while building the application state at startup;
//! request-time failures are catalog errors mapped by the handlers.

use thiserror::Error;

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Service layer error types.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Configuration error (missing bucket, malformed public URL base, ..).
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A client of an external service could not be created.
    #[error("External service error ({service}): {message}")]
    ExternalService {
        service: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ServiceError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an external service error.
    pub fn external(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExternalService {
            service: service.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Attaches the underlying cause.
    pub fn with_source(self, error: impl std::error::Error + Send + Sync + 'static) -> Self {
        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(error);
        match self {
            Self::Config { message, .. } => Self::Config {
                message,
                source: Some(boxed),
            },
            Self::ExternalService {
                service, message, ..
            } => Self::ExternalService {
                service,
                message,
                source: Some(boxed),
            },
        }
    }
}
