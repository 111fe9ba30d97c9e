//! Handler for unmatched paths.

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// Answers any path no route matches with a JSON `404 Not Found`.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Page not found", json!({ "path": uri.path() }))
}
