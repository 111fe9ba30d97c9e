//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AssetService, LookupService};
use crate::domain::backend::GeneBackend;
use crate::domain::storage::ObjectStore;

/// Immutable after startup; cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub lookup_service: Arc<LookupService>,
    pub asset_service: Arc<AssetService>,
    pub contact_email: Arc<str>,
}

impl AppState {
    /// Wires services around the given collaborators.
    pub fn new(
        backend: Arc<dyn GeneBackend>,
        store: Arc<dyn ObjectStore>,
        contact_email: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            lookup_service: Arc::new(LookupService::new(backend)),
            asset_service: Arc::new(AssetService::new(store)),
            contact_email: contact_email.into(),
        }
    }
}
