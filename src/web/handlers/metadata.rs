//! Meta Data page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::domain::assets::META_DATA_ROWS;
use crate::domain::page::Page;
use crate::state::AppState;
use crate::web::view::Layout;

/// A figure with its signed URL, or `None` when unavailable.
#[derive(Debug, Clone)]
pub struct FigureView {
    pub caption: &'static str,
    pub url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ColumnView {
    pub width: u8,
    pub figures: Vec<FigureView>,
}

#[derive(Debug, Clone)]
pub struct RowView {
    pub columns: Vec<ColumnView>,
}

/// Template for the analytics figures page.
#[derive(Template, WebTemplate)]
#[template(path = "metadata.html")]
pub struct MetaDataTemplate {
    pub layout: Layout,
    pub rows: Vec<RowView>,
}

/// Renders the precomputed analytics figures.
///
/// # Endpoint
///
/// `GET /metadata`
///
/// Every figure is signed on every render, in page order.
pub async fn metadata_handler(State(state): State<AppState>) -> impl IntoResponse {
    let layout = Layout::for_page(&state, Page::MetaData).await;

    let mut rows = Vec::with_capacity(META_DATA_ROWS.len());
    for row in META_DATA_ROWS {
        let mut columns = Vec::with_capacity(row.columns.len());
        for column in row.columns {
            let mut figures = Vec::with_capacity(column.figures.len());
            for figure in column.figures {
                figures.push(FigureView {
                    caption: figure.caption,
                    url: state.asset_service.signed_url(figure.object).await,
                });
            }
            columns.push(ColumnView {
                width: column.width,
                figures,
            });
        }
        rows.push(RowView { columns });
    }

    MetaDataTemplate { layout, rows }
}
