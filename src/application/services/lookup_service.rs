//! Lookup dispatch and locus resolution.

use std::sync::Arc;

use crate::domain::backend::{GeneBackend, LookupResult};
use crate::domain::task::TaskQuery;

/// Notification shown after any lookup branch runs.
pub const TASK_COMPLETED: &str = "Task completed successfully.";

/// Outcome of dispatching one Start Task query.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskOutcome {
    /// Branch that ran (see [`TaskQuery::branch`]).
    pub branch: &'static str,
    /// Gene ID(s) handed to the lookup, when resolution succeeded.
    pub gene_ids: Option<String>,
    /// Backend result, unchanged.
    pub result: LookupResult,
    /// Notification for the user.
    ///
    /// Always set, even when `result` is a failure: the page has never
    /// inspected the backend result before announcing completion.
    pub notification: &'static str,
}

/// Forwards normalized identifiers to the gene backend.
///
/// No retries, no validation, no caching. Backend results are passed through
/// untouched.
pub struct LookupService {
    backend: Arc<dyn GeneBackend>,
}

impl LookupService {
    /// Creates a new lookup service.
    pub fn new(backend: Arc<dyn GeneBackend>) -> Self {
        Self { backend }
    }

    /// Looks up one Gene ID.
    pub async fn lookup_gene(&self, gene_id: &str) -> LookupResult {
        self.backend.user_input_menu(gene_id).await
    }

    /// Looks up a canonical comma-joined list of Gene IDs.
    pub async fn lookup_genes(&self, gene_ids_csv: &str) -> LookupResult {
        self.backend.multi_user_input_menu(gene_ids_csv).await
    }

    /// Maps one NCBI Locus ID to a Gene ID.
    pub async fn resolve_locus(&self, locus_id: &str) -> Option<String> {
        self.backend.process_locid(locus_id).await
    }

    /// Maps canonical comma-joined NCBI Locus IDs to comma-joined Gene IDs.
    pub async fn resolve_loci(&self, locus_ids_csv: &str) -> Option<String> {
        self.backend.process_mlocid(locus_ids_csv).await
    }

    /// Name of the configured backend adapter.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Runs the branch selected for `query`.
    ///
    /// Locus branches resolve to Gene IDs first. When resolution fails the
    /// lookup is skipped and a failure result is returned in its place.
    pub async fn dispatch(&self, query: &TaskQuery) -> TaskOutcome {
        let (gene_ids, result) = match query {
            TaskQuery::Gene(id) => (Some(id.clone()), self.lookup_gene(id).await),
            TaskQuery::Genes(ids) => (Some(ids.clone()), self.lookup_genes(ids).await),
            TaskQuery::Locus(locus) => match self.resolve_locus(locus).await {
                Some(id) => {
                    let result = self.lookup_gene(&id).await;
                    (Some(id), result)
                }
                None => (None, unresolved(locus)),
            },
            TaskQuery::Loci(loci) => match self.resolve_loci(loci).await {
                Some(ids) => {
                    let result = self.lookup_genes(&ids).await;
                    (Some(ids), result)
                }
                None => (None, unresolved(loci)),
            },
        };

        if result.is_unsuccessful() {
            tracing::warn!(
                branch = query.branch(),
                input = query.value(),
                "Lookup returned no usable result; completion notice shown regardless"
            );
        } else {
            tracing::info!(branch = query.branch(), input = query.value(), "Lookup completed");
        }

        TaskOutcome {
            branch: query.branch(),
            gene_ids,
            result,
            notification: TASK_COMPLETED,
        }
    }
}

fn unresolved(locus_ids: &str) -> LookupResult {
    LookupResult::Failure(format!("No Gene ID found for NCBI ID(s): {}", locus_ids))
}
