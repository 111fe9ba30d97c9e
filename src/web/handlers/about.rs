//! About page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::domain::contact::{CONTACT_BODY, CONTACT_SUBJECT, mailto_link};
use crate::domain::page::Page;
use crate::state::AppState;
use crate::web::view::Layout;

/// Template for the about page with the contact link.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub layout: Layout,
    pub mailto: String,
}

/// Renders the about page.
///
/// # Endpoint
///
/// `GET /about`
pub async fn about_handler(State(state): State<AppState>) -> impl IntoResponse {
    AboutTemplate {
        layout: Layout::for_page(&state, Page::About).await,
        mailto: mailto_link(&state.contact_email, CONTACT_SUBJECT, CONTACT_BODY),
    }
}
