//! Dashboard route configuration.

use crate::domain::page::Page;
use crate::state::AppState;
use crate::web::handlers::{
    about_handler, demonstration_handler, glossary_handler, home_handler, metadata_handler,
    navigate_handler, start_task_form_handler, start_task_submit_handler,
};
use axum::{Router, routing::get};

/// Page routes. All public; the dashboard has no accounts.
///
/// # Endpoints
///
/// - `GET  /`              - Home
/// - `GET  /start-task`    - Lookup form
/// - `POST /start-task`    - Run a lookup
/// - `GET  /metadata`      - Analytics figures
/// - `GET  /glossary`      - Glossary
/// - `GET  /demonstration` - Tutorial videos
/// - `GET  /about`         - About and contact
/// - `GET  /navigate`      - Sidebar page select
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route(Page::Home.path(), get(home_handler))
        .route(
            Page::StartTask.path(),
            get(start_task_form_handler).post(start_task_submit_handler),
        )
        .route(Page::MetaData.path(), get(metadata_handler))
        .route(Page::Glossary.path(), get(glossary_handler))
        .route(Page::Demonstration.path(), get(demonstration_handler))
        .route(Page::About.path(), get(about_handler))
        .route("/navigate", get(navigate_handler))
}
