mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use common::{FakeGeneBackend, FakeObjectStore, create_test_state};
use gene_dashboard::api::handlers::health_handler;
use gene_dashboard::infrastructure::backend::NullGeneBackend;
use gene_dashboard::infrastructure::storage::NullObjectStore;
use gene_dashboard::state::AppState;
use std::sync::Arc;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_reports_active_adapters() {
    let state = create_test_state(
        Arc::new(FakeGeneBackend::new()),
        Arc::new(FakeObjectStore::default()),
    );

    let response = server(state).get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["storage"]["implementation"], "fake");
    assert_eq!(json["checks"]["backend"]["status"], "ok");
}

#[tokio::test]
async fn test_health_degraded_with_null_adapters() {
    let state = AppState::new(
        Arc::new(NullGeneBackend::new()),
        Arc::new(NullObjectStore::new()),
        "team@example.org",
    );

    let response = server(state).get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["storage"]["status"], "disabled");
    assert_eq!(json["checks"]["backend"]["status"], "disabled");
}
