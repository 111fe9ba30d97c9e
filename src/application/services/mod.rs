//! Business logic services for the application layer.

pub mod asset_service;
pub mod lookup_service;

pub use asset_service::AssetService;
pub use lookup_service::{LookupService, TaskOutcome};
