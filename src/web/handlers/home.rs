//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::domain::page::Page;
use crate::state::AppState;
use crate::web::view::Layout;

/// Template for the landing page.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: Layout,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> impl IntoResponse {
    HomeTemplate {
        layout: Layout::for_page(&state, Page::Home).await,
    }
}
