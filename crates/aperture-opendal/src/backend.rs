//! Storage backend implementation.

use std::time::Instant;

use aperture_core::{ObjectListing, ObjectRecord};
use futures::TryStreamExt;
use opendal::layers::{RetryLayer, TimeoutLayer};
use opendal::{Entry, Operator};

use crate::TRACING_TARGET;
use crate::config::S3Config;
use crate::error::{StorageError, StorageResult};

/// Root path of the operator.
const ROOT: &str = "/";

/// Listing backend that wraps an OpenDAL operator.
#[derive(Clone)]
pub struct StorageBackend {
    operator: Operator,
    config: S3Config,
}

impl StorageBackend {
    /// Creates a new storage backend from configuration.
    pub fn new(config: S3Config) -> StorageResult<Self> {
        config.validate()?;
        let operator = Self::create_operator(&config)?;

        tracing::info!(
            target: TRACING_TARGET,
            bucket = %config.bucket,
            region = %config.region,
            endpoint = config.endpoint.as_deref().unwrap_or("default"),
            timeout_secs = config.timeout().as_secs(),
            max_retries = config.store_max_retries,
            "Storage backend initialized"
        );

        Ok(Self { operator, config })
    }

    /// Creates a backend over an existing operator, applying the timeout
    /// and retry policy of `config`.
    pub fn from_operator(operator: Operator, config: S3Config) -> Self {
        let operator = Self::with_policy(operator, &config);
        Self { operator, config }
    }

    /// Returns the configuration for this backend.
    pub fn config(&self) -> &S3Config {
        &self.config
    }

    /// Lists every record whose key starts with `prefix`.
    ///
    /// The enclosing directory of `prefix` is listed recursively and the
    /// entries are filtered by plain string prefix, so partial names such
    /// as `background/_` are supported. The lister follows continuation
    /// tokens until the store reports exhaustion.
    pub async fn list_records(&self, prefix: Option<&str>) -> StorageResult<Vec<ObjectRecord>> {
        let started = Instant::now();
        let prefix = prefix.unwrap_or_default();
        let dir = enclosing_dir(prefix);

        tracing::debug!(
            target: TRACING_TARGET,
            prefix = %prefix,
            dir = %dir,
            "Listing objects"
        );

        let mut lister = self.operator.lister_with(dir).recursive(true).await?;
        let mut records = Vec::new();

        while let Some(entry) = lister.try_next().await? {
            let key = entry.path();
            if key.is_empty() || key == ROOT || !key.starts_with(prefix) {
                continue;
            }

            records.push(to_record(&entry));
        }

        tracing::debug!(
            target: TRACING_TARGET,
            prefix = %prefix,
            records = records.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Listing complete"
        );

        Ok(records)
    }

    /// Applies per-operation timeout and retry with jittered backoff.
    ///
    /// Listing pages are bounded by the IO timeout, every other call by the
    /// operation timeout; both use `STORE_TIMEOUT`. The retry layer wraps
    /// the timeout layer so timed out calls are retried.
    fn with_policy(operator: Operator, config: &S3Config) -> Operator {
        operator
            .layer(
                TimeoutLayer::new()
                    .with_timeout(config.timeout())
                    .with_io_timeout(config.timeout()),
            )
            .layer(
                RetryLayer::new()
                    .with_max_times(config.store_max_retries)
                    .with_jitter(),
            )
    }

    /// Creates an OpenDAL operator based on configuration.
    #[cfg(any(feature = "s3", test))]
    fn create_operator(config: &S3Config) -> StorageResult<Operator> {
        let mut builder = opendal::services::S3::default()
            .bucket(&config.bucket)
            .region(&config.region);

        if let Some(ref endpoint) = config.endpoint {
            builder = builder.endpoint(endpoint);
        }

        if let Some(ref access_key_id) = config.access_key_id {
            builder = builder.access_key_id(access_key_id);
        }

        if let Some(ref secret_access_key) = config.secret_access_key {
            builder = builder.secret_access_key(secret_access_key);
        }

        let operator = Operator::new(builder)
            .map(|op| op.finish())
            .map_err(|e| StorageError::init(e.to_string()))?;

        Ok(Self::with_policy(operator, config))
    }

    #[cfg(not(any(feature = "s3", test)))]
    fn create_operator(_config: &S3Config) -> StorageResult<Operator> {
        Err(StorageError::init(
            "S3 backend is not supported with current features",
        ))
    }
}

#[async_trait::async_trait]
impl ObjectListing for StorageBackend {
    async fn list(&self, prefix: Option<&str>) -> aperture_core::Result<Vec<ObjectRecord>> {
        Ok(self.list_records(prefix).await?)
    }
}

/// Returns the directory to list for `prefix`: everything up to and
/// including its last `/`, or the root.
fn enclosing_dir(prefix: &str) -> &str {
    match prefix.rfind('/') {
        Some(index) => &prefix[..=index],
        None => ROOT,
    }
}

fn to_record(entry: &Entry) -> ObjectRecord {
    let meta = entry.metadata();

    // Convert chrono DateTime to jiff Timestamp
    let last_modified = meta
        .last_modified()
        .and_then(|dt| jiff::Timestamp::from_second(dt.timestamp()).ok());

    ObjectRecord {
        key: entry.path().to_owned(),
        size: meta.content_length(),
        last_modified,
    }
}

impl std::fmt::Debug for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageBackend")
            .field("bucket", &self.config.bucket)
            .field("region", &self.config.region)
            .finish()
    }
}
