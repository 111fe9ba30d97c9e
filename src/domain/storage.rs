//! Object storage collaborator contract.

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

/// HTTP method a signed URL is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignedMethod {
    Get,
    Head,
}

impl SignedMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
        }
    }
}

impl fmt::Display for SignedMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by object store implementations.
///
/// The asset resolver collapses all of these into a single "unavailable"
/// signal for the UI; the variants only matter for logs.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage credentials rejected: {0}")]
    Credentials(String),

    #[error("Storage transport error: {0}")]
    Transport(String),

    #[error("Unexpected storage response status {status} for {object}")]
    Status { status: u16, object: String },

    #[error("Invalid storage request: {0}")]
    InvalidRequest(String),
}

impl StorageError {
    /// Stable short name used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Credentials(_) => "credentials",
            Self::Transport(_) => "transport",
            Self::Status { .. } => "status",
            Self::InvalidRequest(_) => "invalid_request",
        }
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// A single-bucket object store able to issue signed URLs.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::GcsObjectStore`] - Cloud Storage, V4 HMAC signing
/// - [`crate::infrastructure::storage::NullObjectStore`] - storage disabled
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Checks whether `object_name` exists in the bucket.
    async fn exists(&self, object_name: &str) -> StorageResult<bool>;

    /// Issues a URL granting `method` access to `object_name` for `ttl`.
    fn signed_url(
        &self,
        object_name: &str,
        ttl: Duration,
        method: SignedMethod,
    ) -> StorageResult<String>;

    /// Short implementation name reported by the health endpoint.
    fn name(&self) -> &'static str;
}
