//! Object storage for dashboard assets.
//!
//! Provides two [`ObjectStore`](crate::domain::storage::ObjectStore)
//! implementations:
//! - [`GcsObjectStore`] - Cloud Storage bucket with V4 signed URLs
//! - [`NullObjectStore`] - No-op implementation when credentials are absent

mod gcs_store;
mod null_store;
pub mod v4_signer;

pub use gcs_store::GcsObjectStore;
pub use null_store::NullObjectStore;
pub use v4_signer::V4Signer;
