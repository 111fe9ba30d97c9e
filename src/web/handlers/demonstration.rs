//! Demonstration page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::domain::assets::TUTORIALS;
use crate::domain::page::Page;
use crate::state::AppState;
use crate::web::view::Layout;

pub const VIDEO_UNAVAILABLE: &str = "Video not found or unable to generate URL.";

/// A tutorial video with its signed URL, or `None` when unavailable.
#[derive(Debug, Clone)]
pub struct TutorialView {
    pub title: &'static str,
    pub url: Option<String>,
    pub steps: &'static [&'static str],
}

/// Template for the video tutorials page.
#[derive(Template, WebTemplate)]
#[template(path = "demonstration.html")]
pub struct DemonstrationTemplate {
    pub layout: Layout,
    pub tutorials: Vec<TutorialView>,
    pub unavailable: &'static str,
}

/// Renders the tutorial videos.
///
/// # Endpoint
///
/// `GET /demonstration`
pub async fn demonstration_handler(State(state): State<AppState>) -> impl IntoResponse {
    let layout = Layout::for_page(&state, Page::Demonstration).await;

    let mut tutorials = Vec::with_capacity(TUTORIALS.len());
    for tutorial in TUTORIALS {
        tutorials.push(TutorialView {
            title: tutorial.title,
            url: state.asset_service.signed_url(tutorial.object).await,
            steps: tutorial.steps,
        });
    }

    DemonstrationTemplate {
        layout,
        tutorials,
        unavailable: VIDEO_UNAVAILABLE,
    }
}
