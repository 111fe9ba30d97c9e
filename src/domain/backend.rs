//! Gene backend collaborator contract.
//!
//! The classification lookup and the locus-to-gene mapping live outside this
//! service. [`GeneBackend`] is the seam; implementations live in
//! `crate::infrastructure::backend`.

use async_trait::async_trait;
use serde_json::Value;

/// Opaque outcome of a backend lookup, forwarded to the view unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupResult {
    /// Structured payload (tabular or nested JSON).
    Value(Value),
    /// Plain-text payload.
    Text(String),
    /// The backend reported a failure.
    Failure(String),
    /// The backend returned nothing.
    Empty,
}

impl LookupResult {
    /// True for [`LookupResult::Failure`] and [`LookupResult::Empty`].
    pub fn is_unsuccessful(&self) -> bool {
        matches!(self, Self::Failure(_) | Self::Empty)
    }
}

/// Lookup and locus resolution backend.
///
/// None of these methods return `Result`: whatever the backend produces,
/// including failures, is surfaced as data so the caller can display it.
///
/// # Implementations
///
/// - [`crate::infrastructure::backend::HttpGeneBackend`] - remote HTTP service
/// - [`crate::infrastructure::backend::NullGeneBackend`] - no backend configured
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeneBackend: Send + Sync {
    /// Looks up classification results for one Gene ID.
    async fn user_input_menu(&self, gene_id: &str) -> LookupResult;

    /// Looks up classification results for a comma-joined list of Gene IDs.
    async fn multi_user_input_menu(&self, gene_ids_csv: &str) -> LookupResult;

    /// Maps one NCBI Locus ID to a Gene ID, or `None` when it cannot.
    async fn process_locid(&self, locus_id: &str) -> Option<String>;

    /// Maps comma-joined NCBI Locus IDs to comma-joined Gene IDs.
    async fn process_mlocid(&self, locus_ids_csv: &str) -> Option<String>;

    /// Short implementation name reported by the health endpoint.
    fn name(&self) -> &'static str;
}
