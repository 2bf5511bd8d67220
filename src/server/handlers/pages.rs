//! Page handlers.

use axum::{extract::State, response::Html};

use super::super::AppState;

/// Serve the search page.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.index_page.to_string())
}
