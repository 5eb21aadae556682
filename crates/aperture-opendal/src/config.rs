//! Object store configuration.

use std::fmt;
use std::time::Duration;

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::StorageError;

/// Default timeout of a single store operation, in seconds.
pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 10;

/// Default number of retries of a failed store operation.
pub const DEFAULT_STORE_MAX_RETRIES: usize = 3;

/// Amazon S3 (or S3-compatible) configuration.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct S3Config {
    /// Bucket name.
    #[cfg_attr(feature = "config", arg(long = "aws-bucket-name", env = "AWS_BUCKET_NAME"))]
    pub bucket: String,

    /// AWS region.
    #[cfg_attr(feature = "config", arg(long = "aws-region", env = "AWS_REGION"))]
    pub region: String,

    /// Custom endpoint URL (for S3-compatible storage like MinIO, R2).
    #[cfg_attr(feature = "config", arg(long = "s3-endpoint", env = "S3_ENDPOINT"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Access key ID. Falls back to the ambient credential chain when unset.
    #[cfg_attr(
        feature = "config",
        arg(long = "aws-access-key-id", env = "AWS_ACCESS_KEY_ID", hide_env_values = true)
    )]
    #[serde(default, skip_serializing)]
    pub access_key_id: Option<String>,

    /// Secret access key.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "aws-secret-access-key",
            env = "AWS_SECRET_ACCESS_KEY",
            hide_env_values = true
        )
    )]
    #[serde(default, skip_serializing)]
    pub secret_access_key: Option<String>,

    /// Timeout of a single store operation in seconds.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "store-timeout",
            env = "STORE_TIMEOUT",
            default_value_t = DEFAULT_STORE_TIMEOUT_SECS
        )
    )]
    #[serde(default = "default_store_timeout")]
    pub store_timeout: u64,

    /// Maximum retries of a failed store operation.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "store-max-retries",
            env = "STORE_MAX_RETRIES",
            default_value_t = DEFAULT_STORE_MAX_RETRIES
        )
    )]
    #[serde(default = "default_store_max_retries")]
    pub store_max_retries: usize,
}

fn default_store_timeout() -> u64 {
    DEFAULT_STORE_TIMEOUT_SECS
}

fn default_store_max_retries() -> usize {
    DEFAULT_STORE_MAX_RETRIES
}

impl S3Config {
    /// Creates a new S3 configuration.
    pub fn new(bucket: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            region: region.into(),
            endpoint: None,
            access_key_id: None,
            secret_access_key: None,
            store_timeout: DEFAULT_STORE_TIMEOUT_SECS,
            store_max_retries: DEFAULT_STORE_MAX_RETRIES,
        }
    }

    /// Sets the custom endpoint (for S3-compatible storage).
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets the access credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self.secret_access_key = Some(secret_access_key.into());
        self
    }

    /// Sets the per-operation timeout in seconds.
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.store_timeout = secs;
        self
    }

    /// Sets the maximum number of retries.
    #[must_use]
    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.store_max_retries = retries;
        self
    }

    /// Returns the per-operation timeout, using the default if zero.
    #[inline]
    pub fn timeout(&self) -> Duration {
        match self.store_timeout {
            0 => Duration::from_secs(DEFAULT_STORE_TIMEOUT_SECS),
            secs => Duration::from_secs(secs),
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), StorageError> {
        if self.bucket.trim().is_empty() {
            return Err(StorageError::init("bucket name must not be empty"));
        }

        if self.region.trim().is_empty() {
            return Err(StorageError::init("region must not be empty"));
        }

        if self.access_key_id.is_some() != self.secret_access_key.is_some() {
            return Err(StorageError::init(
                "access key ID and secret access key must be set together",
            ));
        }

        Ok(())
    }
}

impl fmt::Debug for S3Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("S3Config")
            .field("bucket", &self.bucket)
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("credentials", &self.access_key_id.as_ref().map(|_| "[REDACTED]"))
            .field("store_timeout", &self.store_timeout)
            .field("store_max_retries", &self.store_max_retries)
            .finish()
    }
}
