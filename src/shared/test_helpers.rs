#[cfg(test)]
use crate::core::config::StorageConfig;
#[cfg(test)]
use crate::modules::storage::{ObjectStore, StorageError};
#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use std::sync::atomic::{AtomicBool, Ordering};
#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
pub fn test_storage_config(public_url: Option<&str>) -> StorageConfig {
    StorageConfig {
        account_id: "acc123".to_string(),
        access_key_id: "test-key".to_string(),
        secret_access_key: "test-secret".to_string(),
        bucket: "flux-media".to_string(),
        public_url: public_url.map(str::to_string),
        endpoint_host: "r2.cloudflarestorage.com".to_string(),
        endpoint: None,
        region: "auto".to_string(),
    }
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Put {
        key: String,
        content_type: String,
        size: usize,
    },
    Delete {
        key: String,
    },
}

/// In-memory object store that records every call
#[cfg(test)]
#[derive(Default)]
pub struct MockObjectStore {
    calls: Mutex<Vec<StoreCall>>,
    fail_next: AtomicBool,
}

#[cfg(test)]
impl MockObjectStore {
    /// Make the next put or delete fail with a transport error
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn put_keys(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                StoreCall::Put { key, .. } => Some(key),
                StoreCall::Delete { .. } => None,
            })
            .collect()
    }

    pub fn deleted_keys(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                StoreCall::Delete { key } => Some(key),
                StoreCall::Put { .. } => None,
            })
            .collect()
    }

    fn take_failure(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            Err(StorageError::Transport(format!("simulated failure for '{}'", key)))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
#[async_trait]
impl ObjectStore for MockObjectStore {
    async fn put_object(
        &self,
        key: &str,
        data: &[u8],
        content_type: &str,
    ) -> Result<(), StorageError> {
        self.take_failure(key)?;
        self.calls.lock().unwrap().push(StoreCall::Put {
            key: key.to_string(),
            content_type: content_type.to_string(),
            size: data.len(),
        });
        Ok(())
    }

    async fn delete_object(&self, key: &str) -> Result<(), StorageError> {
        self.take_failure(key)?;
        self.calls.lock().unwrap().push(StoreCall::Delete {
            key: key.to_string(),
        });
        Ok(())
    }
}
