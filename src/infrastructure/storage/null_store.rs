//! No-op object store used when storage credentials are not configured.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::domain::storage::{ObjectStore, SignedMethod, StorageError, StorageResult};

/// An object store that holds nothing.
///
/// Every object is reported missing, so pages render their fallback
/// warnings instead of images and videos.
pub struct NullObjectStore;

impl NullObjectStore {
    /// Creates a new NullObjectStore instance.
    pub fn new() -> Self {
        debug!("Using NullObjectStore (storage disabled)");
        Self
    }
}

impl Default for NullObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObjectStore for NullObjectStore {
    async fn exists(&self, _object_name: &str) -> StorageResult<bool> {
        Ok(false)
    }

    fn signed_url(
        &self,
        _object_name: &str,
        _ttl: Duration,
        _method: SignedMethod,
    ) -> StorageResult<String> {
        Err(StorageError::Credentials(
            "storage credentials are not configured".to_string(),
        ))
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}
