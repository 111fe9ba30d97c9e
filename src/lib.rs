//! # Gene Dashboard
//!
//! A browser dashboard for chickpea gene/transcript classification lookups,
//! built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Identifiers, pages, static content and collaborator traits
//! - **Application Layer** ([`application`]) - Lookup dispatch and asset URL resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - Cloud Storage and HTTP gene backend adapters
//! - **API Layer** ([`api`]) - Health endpoint and HTTP middleware
//! - **Web Layer** ([`web`]) - Server-rendered dashboard pages
//!
//! ## Features
//!
//! - Single and multiple Gene ID / NCBI Locus ID lookups
//! - Analytics figures and tutorial videos served via short-lived signed URLs
//! - Glossary and contact pages
//! - Per-IP rate limiting and structured request logging
//!
//! ## Quick Start
//!
//! ```bash
//! export GCS_HMAC_ACCESS_ID="GOOG1E..."   # Optional
//! export GCS_HMAC_SECRET="..."            # Optional
//! export BACKEND_URL="http://localhost:8000"  # Optional
//!
//! cargo run
//! ```
//!
//! Without storage credentials or a backend every page still renders, showing
//! its "not found" warnings.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AssetService, LookupService, TaskOutcome};
    pub use crate::domain::backend::{GeneBackend, LookupResult};
    pub use crate::domain::identifiers::{IdentifierKind, IdentifierSet};
    pub use crate::domain::page::Page;
    pub use crate::domain::storage::{ObjectStore, SignedMethod, StorageError, StorageResult};
    pub use crate::error::AppError;
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}
