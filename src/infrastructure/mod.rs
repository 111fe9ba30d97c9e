//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete clients for object storage and the gene backend.
//!
//! # Modules
//!
//! - [`storage`] - Cloud Storage and no-op object stores
//! - [`backend`] - HTTP and no-op gene backends

pub mod backend;
pub mod storage;
