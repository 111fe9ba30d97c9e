//! Signed URL resolution for dashboard assets.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::storage::{ObjectStore, SignedMethod, StorageResult};

/// Lifetime of every issued asset URL.
pub const SIGNED_URL_TTL: Duration = Duration::from_secs(60 * 60);

/// Resolves storage object names to time-limited read URLs.
///
/// Every call hits the store: nothing is cached across calls or renders.
pub struct AssetService {
    store: Arc<dyn ObjectStore>,
}

impl AssetService {
    /// Creates a new asset service.
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Returns a one-hour GET URL for `object_name`, or `None` when the
    /// object is missing or the store could not be reached.
    ///
    /// Errors never reach the caller. They are logged with their kind so
    /// that "missing" and "unreachable" stay distinguishable in logs.
    pub async fn signed_url(&self, object_name: &str) -> Option<String> {
        match self.try_signed_url(object_name).await {
            Ok(Some(url)) => {
                tracing::debug!(object = object_name, "Generated signed URL");
                Some(url)
            }
            Ok(None) => {
                tracing::warn!(object = object_name, "Object does not exist in bucket");
                None
            }
            Err(e) => {
                tracing::warn!(
                    object = object_name,
                    kind = e.kind(),
                    error = %e,
                    "Failed to generate signed URL"
                );
                None
            }
        }
    }

    async fn try_signed_url(&self, object_name: &str) -> StorageResult<Option<String>> {
        if !self.store.exists(object_name).await? {
            return Ok(None);
        }

        self.store
            .signed_url(object_name, SIGNED_URL_TTL, SignedMethod::Get)
            .map(Some)
    }

    /// Name of the active object store implementation.
    pub fn store_name(&self) -> &'static str {
        self.store.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::storage::{MockObjectStore, StorageError};

    #[tokio::test]
    async fn test_existing_object_is_signed_for_one_hour() {
        let mut store = MockObjectStore::new();
        store
            .expect_exists()
            .withf(|name| name == "Images/1.png")
            .times(1)
            .returning(|_| Ok(true));
        store
            .expect_signed_url()
            .withf(|name, ttl, method| {
                name == "Images/1.png"
                    && *ttl == Duration::from_secs(3600)
                    && *method == SignedMethod::Get
            })
            .times(1)
            .returning(|_, _, _| Ok("https://signed.example/Images/1.png?sig".to_string()));

        let service = AssetService::new(Arc::new(store));

        assert_eq!(
            service.signed_url("Images/1.png").await.as_deref(),
            Some("https://signed.example/Images/1.png?sig")
        );
    }

    #[tokio::test]
    async fn test_missing_object_returns_none_without_signing() {
        let mut store = MockObjectStore::new();
        store.expect_exists().times(1).returning(|_| Ok(false));
        store.expect_signed_url().never();

        let service = AssetService::new(Arc::new(store));

        assert_eq!(service.signed_url("Images/missing.png").await, None);
    }

    #[tokio::test]
    async fn test_transport_error_degrades_to_none() {
        let mut store = MockObjectStore::new();
        store
            .expect_exists()
            .times(1)
            .returning(|_| Err(StorageError::Transport("connection refused".to_string())));
        store.expect_signed_url().never();

        let service = AssetService::new(Arc::new(store));

        assert_eq!(service.signed_url("pvz.gif").await, None);
    }

    #[tokio::test]
    async fn test_signing_error_degrades_to_none() {
        let mut store = MockObjectStore::new();
        store.expect_exists().returning(|_| Ok(true));
        store
            .expect_signed_url()
            .returning(|_, _, _| Err(StorageError::Credentials("bad key".to_string())));

        let service = AssetService::new(Arc::new(store));

        assert_eq!(service.signed_url("pvz.gif").await, None);
    }

    #[tokio::test]
    async fn test_no_caching_between_calls() {
        let mut store = MockObjectStore::new();
        store.expect_exists().times(2).returning(|_| Ok(true));
        store
            .expect_signed_url()
            .times(2)
            .returning(|name, _, _| Ok(format!("https://signed.example/{name}")));

        let service = AssetService::new(Arc::new(store));

        service.signed_url("pvz.gif").await;
        service.signed_url("pvz.gif").await;
    }
}
