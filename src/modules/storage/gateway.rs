//! Storage gateway for user uploads
//!
//! Uploads land under `<folder>/<random-name><original-extension>` and are
//! addressed by URL afterwards. Deletion is best-effort: failures are logged
//! and never surface to the caller.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::config::StorageConfig;
use crate::core::error::{AppError, Result};
use crate::modules::storage::ObjectStore;

/// A file received from a client, ready to be stored
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub data: Vec<u8>,
    pub original_name: String,
    pub content_type: String,
}

pub struct StorageGateway {
    store: Arc<dyn ObjectStore>,
    bucket: String,
    account_id: String,
    endpoint_host: String,
    public_url: Option<String>,
}

impl StorageGateway {
    pub fn new(store: Arc<dyn ObjectStore>, config: &StorageConfig) -> Self {
        Self {
            store,
            bucket: config.bucket.clone(),
            account_id: config.account_id.clone(),
            endpoint_host: config.endpoint_host.clone(),
            public_url: config.public_url.clone(),
        }
    }

    /// Random file name that keeps the extension of `original_name`
    ///
    /// `photo.JPG` becomes e.g. `3f2c...9a1b.JPG`. Names without an
    /// alphanumeric extension get none.
    pub fn generate_file_name(original_name: &str) -> String {
        let extension = Path::new(original_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default();

        format!("{}{}", Uuid::new_v4().simple(), extension)
    }

    pub fn build_key(folder: &str, file_name: &str) -> String {
        format!("{}/{}", folder, file_name)
    }

    /// URL under which a stored key is reachable
    ///
    /// Uses the public base URL when configured, otherwise the provider's
    /// direct bucket endpoint.
    pub fn object_url(&self, key: &str) -> String {
        match &self.public_url {
            Some(base) => format!("{}/{}", base, key),
            None => format!(
                "https://{}.{}.{}/{}",
                self.bucket, self.account_id, self.endpoint_host, key
            ),
        }
    }

    /// Recover the storage key from a URL returned by [`Self::upload`]
    ///
    /// The public base URL prefix is tried first. If it is absent or does not
    /// match, everything after the first `<endpoint-host>/` is taken as the key.
    pub fn key_from_url(&self, url: &str) -> Option<String> {
        if let Some(base) = &self.public_url {
            if let Some(key) = url.strip_prefix(&format!("{}/", base)) {
                return Some(key.to_string()).filter(|key| !key.is_empty());
            }
        }

        url.split_once(&format!("{}/", self.endpoint_host))
            .map(|(_, key)| key.to_string())
            .filter(|key| !key.is_empty())
    }

    /// Store a file under `folder` and return its URL
    ///
    /// Returns `Ok(None)` without touching the store when no file is given.
    /// Any store failure is reported as [`AppError::UploadFailed`].
    pub async fn upload(&self, file: Option<UploadFile>, folder: &str) -> Result<Option<String>> {
        let Some(file) = file else {
            debug!("No file supplied, skipping upload");
            return Ok(None);
        };

        let file_name = Self::generate_file_name(&file.original_name);
        let key = Self::build_key(folder, &file_name);

        self.store
            .put_object(&key, &file.data, &file.content_type)
            .await
            .map_err(|e| AppError::UploadFailed(format!("'{}': {}", file.original_name, e)))?;

        info!(
            "File uploaded: key={}, content_type={}, size={}",
            key,
            file.content_type,
            file.data.len()
        );

        Ok(Some(self.object_url(&key)))
    }

    /// Delete the object behind `url`
    ///
    /// Never fails. Returns `true` only when the store confirmed the delete.
    pub async fn delete(&self, url: &str) -> bool {
        let Some(key) = self.key_from_url(url) else {
            warn!("Could not derive storage key from URL '{}', nothing deleted", url);
            return false;
        };

        match self.store.delete_object(&key).await {
            Ok(()) => {
                info!("File deleted: key={}", key);
                true
            }
            Err(e) => {
                warn!("Failed to delete file '{}': {}", key, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{test_storage_config, MockObjectStore, StoreCall};

    fn gateway(public_url: Option<&str>) -> (StorageGateway, Arc<MockObjectStore>) {
        let store = Arc::new(MockObjectStore::default());
        let config = test_storage_config(public_url);
        (StorageGateway::new(store.clone(), &config), store)
    }

    fn png(name: &str) -> Option<UploadFile> {
        Some(UploadFile {
            data: vec![0x89, b'P', b'N', b'G'],
            original_name: name.to_string(),
            content_type: "image/png".to_string(),
        })
    }

    #[test]
    fn test_generated_name_keeps_extension() {
        let name = StorageGateway::generate_file_name("holiday.photo.PNG");
        assert!(name.ends_with(".PNG"));
        assert_eq!(name.len(), 32 + ".PNG".len());

        let bare = StorageGateway::generate_file_name("README");
        assert_eq!(bare.len(), 32);
        assert!(!bare.contains('.'));
    }

    #[test]
    fn test_generated_name_drops_unsafe_extension() {
        let name = StorageGateway::generate_file_name("a.p ng?x");
        assert_eq!(name.len(), 32);
        assert!(name.chars().all(|c| c.is_ascii_alphanumeric()));

        let trailing_dot = StorageGateway::generate_file_name("notes.");
        assert_eq!(trailing_dot.len(), 32);
    }

    #[test]
    fn test_generated_names_are_unique() {
        let a = StorageGateway::generate_file_name("a.png");
        let b = StorageGateway::generate_file_name("a.png");
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_upload_without_file_is_noop() {
        let (gateway, store) = gateway(Some("https://cdn.flux.app"));

        let result = gateway.upload(None, "avatars").await.unwrap();

        assert!(result.is_none());
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn test_upload_uses_public_base_url() {
        let (gateway, store) = gateway(Some("https://cdn.flux.app"));

        let url = gateway
            .upload(png("me.png"), "avatars")
            .await
            .unwrap()
            .unwrap();

        let calls = store.calls();
        assert_eq!(calls.len(), 1);
        let StoreCall::Put { key, content_type, size } = &calls[0] else {
            panic!("expected a put, got {:?}", calls[0]);
        };
        assert_eq!(content_type, "image/png");
        assert_eq!(*size, 4);
        assert!(key.starts_with("avatars/"));
        assert!(key.ends_with(".png"));
        assert_eq!(url, format!("https://cdn.flux.app/{}", key));
    }

    #[tokio::test]
    async fn test_upload_falls_back_to_direct_endpoint() {
        let (gateway, store) = gateway(None);

        let url = gateway
            .upload(png("cover.png"), "groups/covers")
            .await
            .unwrap()
            .unwrap();

        let key = store.put_keys().remove(0);
        assert_eq!(
            url,
            format!("https://flux-media.acc123.r2.cloudflarestorage.com/{}", key)
        );
    }

    #[tokio::test]
    async fn test_upload_failure_is_fatal() {
        let (gateway, store) = gateway(None);
        store.fail_next();

        let err = gateway.upload(png("a.png"), "posts").await.unwrap_err();

        let AppError::UploadFailed(detail) = err else {
            panic!("expected upload failure, got {:?}", err);
        };
        assert!(detail.starts_with("'a.png': "));
    }

    #[tokio::test]
    async fn test_delete_derives_uploaded_key_from_public_url() {
        let (gateway, store) = gateway(Some("https://cdn.flux.app"));
        let url = gateway
            .upload(png("a.png"), "posts")
            .await
            .unwrap()
            .unwrap();

        assert!(gateway.delete(&url).await);

        assert_eq!(store.deleted_keys(), store.put_keys());
    }

    #[tokio::test]
    async fn test_delete_derives_uploaded_key_from_direct_url() {
        let (gateway, store) = gateway(None);
        let url = gateway
            .upload(png("a.png"), "marketplace/items")
            .await
            .unwrap()
            .unwrap();

        assert!(gateway.delete(&url).await);

        assert_eq!(store.deleted_keys(), store.put_keys());
    }

    #[tokio::test]
    async fn test_delete_of_direct_url_with_public_base_configured() {
        let (gateway, store) = gateway(Some("https://cdn.flux.app"));

        let deleted = gateway
            .delete("https://flux-media.acc123.r2.cloudflarestorage.com/posts/abc.png")
            .await;

        assert!(deleted);
        assert_eq!(store.deleted_keys(), vec!["posts/abc.png".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_swallows_store_failure() {
        let (gateway, store) = gateway(Some("https://cdn.flux.app"));
        store.fail_next();

        let deleted = gateway.delete("https://cdn.flux.app/posts/abc.png").await;

        assert!(!deleted);
    }

    #[tokio::test]
    async fn test_delete_of_foreign_url_does_not_call_store() {
        let (gateway, store) = gateway(Some("https://cdn.flux.app"));

        assert!(!gateway.delete("https://example.com/posts/abc.png").await);
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_of_bare_public_base_does_not_call_store() {
        let (gateway, store) = gateway(Some("https://cdn.flux.app"));

        assert_eq!(gateway.key_from_url("https://cdn.flux.app/"), None);
        assert!(!gateway.delete("https://cdn.flux.app/").await);
        assert!(store.calls().is_empty());
    }

    #[test]
    fn test_key_from_url_prefers_public_prefix() {
        let (gateway, _) = gateway(Some("https://cdn.flux.app"));

        // Both markers present: the public prefix wins
        let url = "https://cdn.flux.app/mirror/x.r2.cloudflarestorage.com/k.png";
        assert_eq!(
            gateway.key_from_url(url).as_deref(),
            Some("mirror/x.r2.cloudflarestorage.com/k.png")
        );
    }
}
