//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Reports liveness and which collaborator adapters are active.
///
/// # Endpoint
///
/// `GET /health`
///
/// Always `200 OK`: disabled collaborators degrade pages to warnings, they
/// never take the dashboard down.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "storage": { "status": "ok", "implementation": "gcs" },
///     "backend": { "status": "disabled", "implementation": "disabled" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let storage = CheckStatus::for_implementation(state.asset_service.store_name());
    let backend = CheckStatus::for_implementation(state.lookup_service.backend_name());

    let status = if storage.status == "ok" && backend.status == "ok" {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { storage, backend },
    })
}
