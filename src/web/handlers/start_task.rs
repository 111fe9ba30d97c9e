//! Start Task page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::IntoResponse,
};

use crate::domain::page::Page;
use crate::domain::task::StartTaskInput;
use crate::state::AppState;
use crate::web::view::{Layout, Notice, ResultView};

pub const NEED_ID_TO_PROCEED: &str = "Need Gene ID/ NCBI ID to proceed.";
pub const NEED_EITHER_ID: &str = "Need either a Gene ID or NCBI ID to proceed.";
pub const PRESS_START: &str = "Press the 'Start' button to begin the task.";
pub const FOLLOW_INSTRUCTIONS: &str = "Follow the instructions or check out demonstrations";

/// Template for the lookup form and its result.
#[derive(Template, WebTemplate)]
#[template(path = "start_task.html")]
pub struct StartTaskTemplate {
    pub layout: Layout,
    pub input: StartTaskInput,
    pub notices: Vec<Notice>,
    pub result: Option<ResultView>,
}

/// Renders the form before submission.
///
/// # Endpoint
///
/// `GET /start-task`
///
/// Fields may be prefilled via the query string. Nothing is looked up.
pub async fn start_task_form_handler(
    State(state): State<AppState>,
    Query(input): Query<StartTaskInput>,
) -> impl IntoResponse {
    let notices = if input.has_gene_id() {
        vec![Notice::info(PRESS_START), Notice::info(FOLLOW_INSTRUCTIONS)]
    } else {
        vec![Notice::warning(NEED_ID_TO_PROCEED)]
    };

    StartTaskTemplate {
        layout: Layout::for_page(&state, Page::StartTask).await,
        input,
        notices,
        result: None,
    }
}

/// Runs the lookup for a submitted form.
///
/// # Endpoint
///
/// `POST /start-task` (form fields `tid`, `mtid`, `locid`, `mlocid`)
///
/// # Precedence
///
/// Single Gene ID, then multiple Gene IDs, then single NCBI ID, then
/// multiple NCBI IDs. Only the first non-empty field is used. With every
/// field empty a warning is shown and the backend is not called.
pub async fn start_task_submit_handler(
    State(state): State<AppState>,
    Form(input): Form<StartTaskInput>,
) -> impl IntoResponse {
    let layout = Layout::for_page(&state, Page::StartTask).await;

    let (notices, result) = match input.select_query() {
        Some(query) => {
            let outcome = state.lookup_service.dispatch(&query).await;
            (
                vec![Notice::success(outcome.notification)],
                Some(ResultView::from(&outcome.result)),
            )
        }
        None => (vec![Notice::warning(NEED_EITHER_ID)], None),
    };

    StartTaskTemplate {
        layout,
        input,
        notices,
        result,
    }
}
