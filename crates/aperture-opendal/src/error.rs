//! Storage error types.

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Failed to initialize the storage backend.
    #[error("storage initialization failed: {0}")]
    Init(String),

    /// Prefix or object not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Backend-specific error.
    #[error("backend error: {0}")]
    Backend(opendal::Error),
}

impl StorageError {
    /// Creates a new initialization error.
    pub fn init(msg: impl Into<String>) -> Self {
        Self::Init(msg.into())
    }
}

impl From<opendal::Error> for StorageError {
    fn from(err: opendal::Error) -> Self {
        use opendal::ErrorKind;

        match err.kind() {
            ErrorKind::NotFound => Self::NotFound(err.to_string()),
            ErrorKind::PermissionDenied => Self::PermissionDenied(err.to_string()),
            ErrorKind::ConfigInvalid => Self::Init(err.to_string()),
            _ => Self::Backend(err),
        }
    }
}

impl From<StorageError> for aperture_core::Error {
    fn from(err: StorageError) -> Self {
        use aperture_core::Error;

        match err {
            StorageError::Init(_) => Error::configuration()
                .with_message(err.to_string())
                .with_source(err),
            StorageError::NotFound(_) => Error::not_found()
                .with_message(err.to_string())
                .with_source(err),
            StorageError::PermissionDenied(_) | StorageError::Backend(_) => {
                Error::external_error()
                    .with_message(err.to_string())
                    .with_source(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use aperture_core::ErrorKind;

    use super::*;

    #[test]
    fn opendal_kinds_are_classified() {
        let err = opendal::Error::new(opendal::ErrorKind::NotFound, "missing");
        assert!(matches!(StorageError::from(err), StorageError::NotFound(_)));

        let err = opendal::Error::new(opendal::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(
            StorageError::from(err),
            StorageError::PermissionDenied(_)
        ));

        let err = opendal::Error::new(opendal::ErrorKind::Unexpected, "boom");
        assert!(matches!(StorageError::from(err), StorageError::Backend(_)));
    }

    #[test]
    fn converts_into_core_error() {
        let error: aperture_core::Error = StorageError::init("no bucket").into();
        assert_eq!(error.kind(), ErrorKind::Configuration);

        let err = opendal::Error::new(opendal::ErrorKind::PermissionDenied, "denied");
        let error: aperture_core::Error = StorageError::from(err).into();
        assert_eq!(error.kind(), ErrorKind::ExternalError);
        assert!(error.message().starts_with("permission denied"));
    }
}
