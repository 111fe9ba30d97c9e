#![allow(dead_code)]

use async_trait::async_trait;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use gene_dashboard::domain::backend::{GeneBackend, LookupResult};
use gene_dashboard::domain::storage::{ObjectStore, SignedMethod, StorageError, StorageResult};
use gene_dashboard::routes::app_router;
use gene_dashboard::state::AppState;
use gene_dashboard::web::routes::page_routes;
use serde_json::json;
use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const CONTACT_EMAIL: &str = "team@example.org";
pub const SIGNED_PREFIX: &str = "https://storage.test/";

/// Object store serving a fixed set of objects and recording every check.
#[derive(Default)]
pub struct FakeObjectStore {
    present: HashSet<String>,
    broken: bool,
    checked: Mutex<Vec<String>>,
}

impl FakeObjectStore {
    /// Store where every object in `objects` exists.
    pub fn with_objects<'a>(objects: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            present: objects.into_iter().map(str::to_string).collect(),
            ..Self::default()
        }
    }

    /// Store whose every call fails with a transport error.
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn checked(&self) -> Vec<String> {
        self.checked.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStore for FakeObjectStore {
    async fn exists(&self, object_name: &str) -> StorageResult<bool> {
        self.checked.lock().unwrap().push(object_name.to_string());
        if self.broken {
            return Err(StorageError::Transport("connection refused".to_string()));
        }
        Ok(self.present.contains(object_name))
    }

    fn signed_url(
        &self,
        object_name: &str,
        ttl: Duration,
        method: SignedMethod,
    ) -> StorageResult<String> {
        Ok(format!(
            "{}{}?method={}&ttl={}",
            SIGNED_PREFIX,
            object_name,
            method,
            ttl.as_secs()
        ))
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

/// One recorded backend call: operation name and argument.
pub type Call = (&'static str, String);

/// Gene backend answering from fixed tables and recording every call.
#[derive(Default)]
pub struct FakeGeneBackend {
    genes: HashMap<String, serde_json::Value>,
    loci: HashMap<String, String>,
    calls: Mutex<Vec<Call>>,
}

impl FakeGeneBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gene(mut self, gene_id: &str, class: &str) -> Self {
        self.genes.insert(
            gene_id.to_string(),
            json!({"gene_id": gene_id, "class": class}),
        );
        self
    }

    pub fn with_locus(mut self, locus_id: &str, gene_id: &str) -> Self {
        self.loci.insert(locus_id.to_string(), gene_id.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, op: &'static str, arg: &str) {
        self.calls.lock().unwrap().push((op, arg.to_string()));
    }
}

#[async_trait]
impl GeneBackend for FakeGeneBackend {
    async fn user_input_menu(&self, gene_id: &str) -> LookupResult {
        self.record("user_input_menu", gene_id);
        match self.genes.get(gene_id) {
            Some(value) => LookupResult::Value(json!([value])),
            None => LookupResult::Failure(format!("Gene ID {} not found", gene_id)),
        }
    }

    async fn multi_user_input_menu(&self, gene_ids_csv: &str) -> LookupResult {
        self.record("multi_user_input_menu", gene_ids_csv);
        let rows: Vec<_> = gene_ids_csv
            .split(',')
            .filter_map(|id| self.genes.get(id).cloned())
            .collect();
        LookupResult::Value(json!(rows))
    }

    async fn process_locid(&self, locus_id: &str) -> Option<String> {
        self.record("process_locid", locus_id);
        self.loci.get(locus_id).cloned()
    }

    async fn process_mlocid(&self, locus_ids_csv: &str) -> Option<String> {
        self.record("process_mlocid", locus_ids_csv);
        let ids: Vec<_> = locus_ids_csv
            .split(',')
            .filter_map(|locus| self.loci.get(locus).cloned())
            .collect();
        (!ids.is_empty()).then(|| ids.join(","))
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

pub fn create_test_state(
    backend: Arc<FakeGeneBackend>,
    store: Arc<FakeObjectStore>,
) -> AppState {
    AppState::new(backend, store, CONTACT_EMAIL)
}

/// Page router without the rate limiter (the test transport has no peer address).
pub fn create_test_server(backend: Arc<FakeGeneBackend>, store: Arc<FakeObjectStore>) -> TestServer {
    let app = page_routes().with_state(create_test_state(backend, store));
    TestServer::new(app).unwrap()
}

/// Full application router over a real socket, so the rate limiter sees a peer address.
pub fn create_app_server(backend: Arc<FakeGeneBackend>, store: Arc<FakeObjectStore>) -> TestServer {
    let app = app_router(create_test_state(backend, store));

    TestServer::builder()
        .http_transport()
        .build(ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app))
        .unwrap()
}
