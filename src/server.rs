//! HTTP server initialization and runtime setup.
//!
//! Wires the object store and gene backend adapters, then runs the Axum
//! server until shutdown.

use crate::config::Config;
use crate::domain::backend::GeneBackend;
use crate::domain::storage::ObjectStore;
use crate::infrastructure::backend::{HttpGeneBackend, NullGeneBackend};
use crate::infrastructure::storage::{GcsObjectStore, NullObjectStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Missing or broken collaborator configuration never stops startup: the
/// matching null adapter is used and pages show their warnings instead.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_object_store(&config);
    let backend = build_gene_backend(&config);

    let state = AppState::new(backend, store, config.contact_email.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Builds the object store from configuration.
///
/// Falls back to [`NullObjectStore`] when no credentials are configured or
/// the endpoint cannot be used.
pub fn build_object_store(config: &Config) -> Arc<dyn ObjectStore> {
    let Some(credentials) = &config.storage_credentials else {
        tracing::info!("Object storage disabled (no HMAC credentials)");
        return Arc::new(NullObjectStore::new());
    };

    match GcsObjectStore::new(
        credentials.clone(),
        &config.storage_endpoint,
        &config.storage_bucket,
    ) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::warn!("Failed to configure object storage: {}. Using NullObjectStore.", e);
            Arc::new(NullObjectStore::new())
        }
    }
}

/// Builds the gene backend from configuration.
pub fn build_gene_backend(config: &Config) -> Arc<dyn GeneBackend> {
    let Some(backend_url) = &config.backend_url else {
        tracing::info!("Gene backend disabled (BACKEND_URL not set)");
        return Arc::new(NullGeneBackend::new());
    };

    tracing::info!(url = %backend_url, "Gene backend enabled");
    Arc::new(HttpGeneBackend::new(backend_url))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
