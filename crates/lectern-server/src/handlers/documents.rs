//! Server-rendered HTML pages.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::handlers::to_url_path;
use crate::layout::{self, Article};
use crate::state::AppState;

/// Shown at `/` when no root has an `index.md`.
const EMPTY_HOME: &str = "<p>Choose a page from the contents.</p>\n";

/// Handle GET /.
pub(crate) async fn get_home(State(state): State<Arc<AppState>>) -> Html<String> {
    let nav = state.site.navigation();
    let home = state.site.home();
    let html = home.as_ref().map_or(EMPTY_HOME, |content| content.html.as_str());

    Html(layout::render_page(
        &state.site_title,
        &nav,
        &Article {
            title: &state.site_title,
            html,
            path: "/",
            verse: None,
        },
    ))
}

/// Handle GET /{slug}.
pub(crate) async fn get_document(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let nav = state.site.navigation();

    match state.site.render(&slug) {
        Ok(content) => Html(layout::render_page(
            &state.site_title,
            &nav,
            &Article {
                title: &content.title,
                html: &content.html,
                path: &to_url_path(&content.slug),
                verse: content.verse_indicator.as_deref(),
            },
        ))
        .into_response(),
        Err(e) => {
            tracing::debug!(slug = %e.slug(), "Page not found");
            (
                StatusCode::NOT_FOUND,
                Html(layout::render_not_found(&state.site_title, &nav, e.slug())),
            )
                .into_response()
        }
    }
}
