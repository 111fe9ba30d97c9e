//! Sidebar page selection.

use axum::{extract::Query, response::Redirect};
use serde::Deserialize;
use serde_json::json;

use crate::domain::page::Page;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct NavigateParams {
    pub page: String,
}

/// Redirects the sidebar select to the chosen page.
///
/// # Endpoint
///
/// `GET /navigate?page=<label>`
///
/// # Errors
///
/// Returns [`AppError::Validation`] if `page` is not one of the six page labels.
pub async fn navigate_handler(
    Query(params): Query<NavigateParams>,
) -> Result<Redirect, AppError> {
    let page = params
        .page
        .parse::<Page>()
        .map_err(|e| AppError::bad_request(e.to_string(), json!({ "page": e.0 })))?;

    Ok(Redirect::to(page.path()))
}
