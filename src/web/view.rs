//! View models shared by the page templates.

use serde_json::Value;

use crate::domain::assets::LOGO;
use crate::domain::backend::LookupResult;
use crate::domain::page::Page;
use crate::state::AppState;

pub const APP_TITLE: &str = "MultiClassClassificationInput App";

/// One entry of the sidebar page select.
#[derive(Debug, Clone)]
pub struct NavItem {
    pub label: &'static str,
    pub selected: bool,
}

/// Chrome shared by every page: title, sidebar and logo.
#[derive(Debug, Clone)]
pub struct Layout {
    pub title: &'static str,
    pub page_title: &'static str,
    pub nav: Vec<NavItem>,
    pub logo_url: Option<String>,
}

impl Layout {
    /// Builds the chrome for `current`, resolving the logo URL.
    pub async fn for_page(state: &AppState, current: Page) -> Self {
        let logo_url = state.asset_service.signed_url(LOGO).await;

        Self {
            title: APP_TITLE,
            page_title: current.label(),
            nav: Page::ALL
                .into_iter()
                .map(|page| NavItem {
                    label: page.label(),
                    selected: page == current,
                })
                .collect(),
            logo_url,
        }
    }
}

/// A banner message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// `success`, `info` or `warning`.
    pub level: &'static str,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: "success",
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: "info",
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: "warning",
            text: text.into(),
        }
    }
}

/// Display form of a backend [`LookupResult`].
///
/// `kind` is one of `table`, `text`, `failure` or `empty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub kind: &'static str,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub text: String,
}

impl ResultView {
    fn table(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            kind: "table",
            columns,
            rows,
            text: String::new(),
        }
    }

    fn text(kind: &'static str, text: String) -> Self {
        Self {
            kind,
            columns: Vec::new(),
            rows: Vec::new(),
            text,
        }
    }
}

impl From<&LookupResult> for ResultView {
    fn from(result: &LookupResult) -> Self {
        match result {
            LookupResult::Value(value) => from_value(value),
            LookupResult::Text(text) => Self::text("text", text.clone()),
            LookupResult::Failure(message) => Self::text("failure", message.clone()),
            LookupResult::Empty => Self::text("empty", "No result returned.".to_string()),
        }
    }
}

/// Arrays of objects become a table keyed by the first row's fields, in the
/// order the backend sent them. Single objects become a field/value table;
/// anything else is pretty-printed.
fn from_value(value: &Value) -> ResultView {
    match value {
        Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
            let columns: Vec<String> = items[0]
                .as_object()
                .map(|first| first.keys().cloned().collect())
                .unwrap_or_default();

            let rows = items
                .iter()
                .filter_map(Value::as_object)
                .map(|row| {
                    columns
                        .iter()
                        .map(|column| row.get(column).map(cell).unwrap_or_default())
                        .collect()
                })
                .collect();

            ResultView::table(columns, rows)
        }
        Value::Object(fields) => ResultView::table(
            vec!["field".to_string(), "value".to_string()],
            fields
                .iter()
                .map(|(key, value)| vec![key.clone(), cell(value)])
                .collect(),
        ),
        Value::String(text) => ResultView::text("text", text.clone()),
        other => ResultView::text(
            "text",
            serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
        ),
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
