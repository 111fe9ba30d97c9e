//! Gene backend used when no backend URL is configured.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::backend::{GeneBackend, LookupResult};

/// A backend that knows no genes.
///
/// Lookups return [`LookupResult::Empty`] and locus resolution never
/// succeeds.
pub struct NullGeneBackend;

impl NullGeneBackend {
    /// Creates a new NullGeneBackend instance.
    pub fn new() -> Self {
        debug!("Using NullGeneBackend (lookups disabled)");
        Self
    }
}

impl Default for NullGeneBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GeneBackend for NullGeneBackend {
    async fn user_input_menu(&self, _gene_id: &str) -> LookupResult {
        LookupResult::Empty
    }

    async fn multi_user_input_menu(&self, _gene_ids_csv: &str) -> LookupResult {
        LookupResult::Empty
    }

    async fn process_locid(&self, _locus_id: &str) -> Option<String> {
        None
    }

    async fn process_mlocid(&self, _locus_ids_csv: &str) -> Option<String> {
        None
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}
