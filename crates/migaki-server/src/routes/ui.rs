//! UI Routes - Embedded form page

use axum::{response::Html, routing::get, Router};

use crate::AppState;

static INDEX_HTML: &str = include_str!("../../static/index.html");

/// Serve the embedded web form at `GET /`.
pub async fn ui_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(ui_handler))
}
