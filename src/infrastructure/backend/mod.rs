//! Gene backend clients.
//!
//! - [`HttpGeneBackend`] - Remote classification service over HTTP
//! - [`NullGeneBackend`] - No-op implementation when no backend is configured

mod http_backend;
mod null_backend;

pub use http_backend::{BackendError, HttpGeneBackend};
pub use null_backend::NullGeneBackend;
