//! Application layer services implementing the dashboard's logic.
//!
//! Services consume the collaborator traits from [`crate::domain`] and give
//! HTTP handlers a small, side-effect-explicit API.
//!
//! # Available Services
//!
//! - [`services::lookup_service::LookupService`] - Locus resolution and lookup dispatch
//! - [`services::asset_service::AssetService`] - Signed URLs for stored assets

pub mod services;
