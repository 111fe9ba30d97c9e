mod common;

use common::{FakeGeneBackend, FakeObjectStore, create_test_server};
use std::sync::Arc;

fn backend() -> Arc<FakeGeneBackend> {
    Arc::new(
        FakeGeneBackend::new()
            .with_gene("Ca_00001", "lncRNA")
            .with_gene("Ca_00002", "TF")
            .with_locus("LOC101511858", "Ca_00002")
            .with_locus("LOC101496413", "Ca_00001"),
    )
}

fn store() -> Arc<FakeObjectStore> {
    Arc::new(FakeObjectStore::default())
}

#[tokio::test]
async fn test_form_without_gene_id_warns() {
    let backend = backend();
    let server = create_test_server(backend.clone(), store());

    let response = server.get("/start-task").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Need Gene ID/ NCBI ID to proceed."));
    assert!(html.contains("name=\"mlocid\""));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_form_prefilled_gene_id_shows_instructions() {
    let backend = backend();
    let server = create_test_server(backend.clone(), store());

    let response = server
        .get("/start-task")
        .add_query_param("tid", "Ca_00001")
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("value=\"Ca_00001\""));
    assert!(html.contains("Follow the instructions or check out demonstrations"));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_single_gene_takes_precedence() {
    let backend = backend();
    let server = create_test_server(backend.clone(), store());

    let response = server
        .post("/start-task")
        .form(&[
            ("tid", " Ca_00001 "),
            ("mtid", "Ca_00002"),
            ("locid", "LOC101511858"),
            ("mlocid", ""),
        ])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Task completed successfully."));
    assert!(html.contains("<td>lncRNA</td>"));
    assert_eq!(
        backend.calls(),
        vec![("user_input_menu", "Ca_00001".to_string())]
    );
}

#[tokio::test]
async fn test_multiple_genes_are_deduplicated() {
    let backend = backend();
    let server = create_test_server(backend.clone(), store());

    let response = server
        .post("/start-task")
        .form(&[("mtid", "Ca_00002, Ca_00001 Ca_00002,,")])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<td>TF</td>"));
    assert!(html.contains("<td>lncRNA</td>"));
    assert_eq!(
        backend.calls(),
        vec![("multi_user_input_menu", "Ca_00002,Ca_00001".to_string())]
    );
}

#[tokio::test]
async fn test_locus_is_resolved_before_lookup() {
    let backend = backend();
    let server = create_test_server(backend.clone(), store());

    let response = server
        .post("/start-task")
        .form(&[("locid", "LOC101511858")])
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("<td>TF</td>"));
    assert_eq!(
        backend.calls(),
        vec![
            ("process_locid", "LOC101511858".to_string()),
            ("user_input_menu", "Ca_00002".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_multiple_loci_are_resolved_before_lookup() {
    let backend = backend();
    let server = create_test_server(backend.clone(), store());

    let response = server
        .post("/start-task")
        .form(&[("mlocid", "LOC101511858 LOC101496413")])
        .await;

    response.assert_status_ok();
    assert_eq!(
        backend.calls(),
        vec![
            ("process_mlocid", "LOC101511858,LOC101496413".to_string()),
            ("multi_user_input_menu", "Ca_00002,Ca_00001".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_unresolved_locus_skips_lookup_but_still_notifies() {
    let backend = backend();
    let server = create_test_server(backend.clone(), store());

    let response = server
        .post("/start-task")
        .form(&[("locid", "LOC000000000")])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Task completed successfully."));
    assert!(html.contains("No Gene ID found for NCBI ID(s): LOC000000000"));
    assert_eq!(
        backend.calls(),
        vec![("process_locid", "LOC000000000".to_string())]
    );
}

#[tokio::test]
async fn test_backend_failure_is_displayed_verbatim() {
    let backend = backend();
    let server = create_test_server(backend.clone(), store());

    let response = server
        .post("/start-task")
        .form(&[("tid", "Ca_99999")])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Task completed successfully."));
    assert!(html.contains("Gene ID Ca_99999 not found"));
}

#[tokio::test]
async fn test_empty_submission_warns_without_calls() {
    let backend = backend();
    let server = create_test_server(backend.clone(), store());

    let response = server
        .post("/start-task")
        .form(&[("tid", "  "), ("mtid", " , "), ("locid", ""), ("mlocid", "")])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Need either a Gene ID or NCBI ID to proceed."));
    assert!(!html.contains("Task completed successfully."));
    assert!(backend.calls().is_empty());
}
