//! Glossary page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::domain::glossary::{GLOSSARY, GlossaryEntry};
use crate::domain::page::Page;
use crate::state::AppState;
use crate::web::view::Layout;

/// Template for the glossary page.
///
/// Each term is rendered as a collapsible `<details>` block.
#[derive(Template, WebTemplate)]
#[template(path = "glossary.html")]
pub struct GlossaryTemplate {
    pub layout: Layout,
    pub entries: &'static [GlossaryEntry],
}

/// Renders the glossary.
///
/// # Endpoint
///
/// `GET /glossary`
pub async fn glossary_handler(State(state): State<AppState>) -> impl IntoResponse {
    GlossaryTemplate {
        layout: Layout::for_page(&state, Page::Glossary).await,
        entries: GLOSSARY,
    }
}
