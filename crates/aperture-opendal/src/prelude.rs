//! Convenient re-exports for common use.

pub use crate::backend::StorageBackend;
pub use crate::config::S3Config;
pub use crate::error::{StorageError, StorageResult};
