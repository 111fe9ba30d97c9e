//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response with collaborator status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Which adapter serves each collaborator.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub storage: CheckStatus,
    pub backend: CheckStatus,
}

/// Individual collaborator status.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    /// `ok` when a real adapter is wired, `disabled` for the null adapter.
    pub status: String,
    pub implementation: String,
}

impl CheckStatus {
    pub fn for_implementation(name: &str) -> Self {
        Self {
            status: if name == "disabled" { "disabled" } else { "ok" }.to_string(),
            implementation: name.to_string(),
        }
    }
}
