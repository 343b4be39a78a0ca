//! S3-compatible object store client
//!
//! The [`ObjectStore`] trait is the network seam used by the storage
//! gateway. [`S3ObjectStore`] implements it with the rust-s3 crate, which
//! takes care of SigV4 request signing.

use async_trait::async_trait;
use s3::creds::Credentials;
use s3::{Bucket, Region};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::config::StorageConfig;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage client configuration error: {0}")]
    Config(String),

    #[error("Storage request failed: {0}")]
    Transport(String),

    #[error("Storage returned status {status} for '{key}'")]
    Status { key: String, status: u16 },
}

/// Minimal write/delete interface over an object store bucket
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write `data` under `key`
    async fn put_object(
        &self,
        key: &str,
        data: &[u8],
        content_type: &str,
    ) -> Result<(), StorageError>;

    /// Remove the object stored under `key`
    async fn delete_object(&self, key: &str) -> Result<(), StorageError>;
}

/// rust-s3 backed object store
pub struct S3ObjectStore {
    bucket: Box<Bucket>,
}

impl S3ObjectStore {
    pub fn new(config: &StorageConfig) -> Result<Self, StorageError> {
        let credentials = Credentials::new(
            Some(&config.access_key_id),
            Some(&config.secret_access_key),
            None,
            None,
            None,
        )
        .map_err(|e| StorageError::Config(format!("Failed to create credentials: {}", e)))?;

        let region = Region::Custom {
            region: config.region.clone(),
            endpoint: config.api_endpoint(),
        };

        let mut bucket = Bucket::new(&config.bucket, region, credentials)
            .map_err(|e| StorageError::Config(format!("Failed to create bucket handle: {}", e)))?;

        // Path-style URLs (https://endpoint/bucket/key) work against R2 and MinIO alike
        bucket.set_path_style();

        info!(
            "Object store initialized for endpoint: {}, bucket: {}",
            config.api_endpoint(),
            config.bucket
        );

        Ok(Self { bucket })
    }

    fn check_status(key: &str, status: u16) -> Result<(), StorageError> {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(StorageError::Status {
                key: key.to_string(),
                status,
            })
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(
        &self,
        key: &str,
        data: &[u8],
        content_type: &str,
    ) -> Result<(), StorageError> {
        let response = self
            .bucket
            .put_object_with_content_type(key, data, content_type)
            .await
            .map_err(|e| StorageError::Transport(format!("put '{}': {}", key, e)))?;

        Self::check_status(key, response.status_code())?;

        debug!("Uploaded object '{}' to bucket '{}'", key, self.bucket.name());
        Ok(())
    }

    async fn delete_object(&self, key: &str) -> Result<(), StorageError> {
        let response = self
            .bucket
            .delete_object(key)
            .await
            .map_err(|e| StorageError::Transport(format!("delete '{}': {}", key, e)))?;

        Self::check_status(key, response.status_code())?;

        debug!(
            "Deleted object '{}' from bucket '{}'",
            key,
            self.bucket.name()
        );
        Ok(())
    }
}
