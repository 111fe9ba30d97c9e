//! Cloud Storage object store.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info};

use super::v4_signer::V4Signer;
use crate::config::StorageCredentials;
use crate::domain::storage::{ObjectStore, SignedMethod, StorageError, StorageResult};

/// Lifetime of the internal URL used for existence checks.
const EXISTS_CHECK_TTL: Duration = Duration::from_secs(60);

/// Object store backed by one Cloud Storage bucket.
///
/// Signs V4 URLs locally with an HMAC key and checks existence with a signed
/// `HEAD` request against the XML API. One attempt per call; timeouts are
/// the HTTP client's defaults.
pub struct GcsObjectStore {
    signer: V4Signer,
    client: reqwest::Client,
}

impl GcsObjectStore {
    /// Creates a store for `bucket` at `endpoint` using `credentials`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidRequest`] if `endpoint` is not a valid
    /// http(s) URL.
    pub fn new(
        credentials: StorageCredentials,
        endpoint: &str,
        bucket: &str,
    ) -> StorageResult<Self> {
        let signer = V4Signer::new(credentials, endpoint, bucket)?;
        let client = reqwest::Client::builder()
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        info!("Cloud Storage enabled for bucket {}", bucket);

        Ok(Self { signer, client })
    }
}

#[async_trait]
impl ObjectStore for GcsObjectStore {
    async fn exists(&self, object_name: &str) -> StorageResult<bool> {
        let url = self
            .signer
            .sign(object_name, SignedMethod::Head, EXISTS_CHECK_TTL, Utc::now())?;

        let response = self
            .client
            .head(&url)
            .send()
            .await
            .map_err(|e| StorageError::Transport(e.to_string()))?;

        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => {
                debug!(
                    object = object_name,
                    bucket = self.signer.bucket(),
                    "Object not found"
                );
                Ok(false)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(StorageError::Credentials(
                format!("HEAD {} returned {}", object_name, response.status()),
            )),
            status => Err(StorageError::Status {
                status: status.as_u16(),
                object: object_name.to_string(),
            }),
        }
    }

    fn signed_url(
        &self,
        object_name: &str,
        ttl: Duration,
        method: SignedMethod,
    ) -> StorageResult<String> {
        self.signer.sign(object_name, method, ttl, Utc::now())
    }

    fn name(&self) -> &'static str {
        "gcs"
    }
}
