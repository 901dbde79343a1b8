//! Pages API endpoint.
//!
//! Resolves a slug and returns the rendered page as JSON with an `ETag`.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use lectern_site::{ResolvedContent, TocEntry};
use md5::{Digest, Md5};
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/pages/{slug}.
#[derive(Serialize)]
struct PageResponse {
    /// Requested slug, segments joined with `/`.
    slug: String,
    /// Title derived from the slug.
    title: String,
    /// Verse locator, if the slug has one.
    verse: Option<String>,
    /// Rendered HTML content.
    html: String,
    /// Table of contents entries.
    toc: Vec<TocResponse>,
}

/// Table of contents entry for serialization.
#[derive(Serialize)]
struct TocResponse {
    /// Heading level (2-6).
    level: u8,
    /// Heading text.
    title: String,
    /// Anchor ID.
    id: String,
}

impl From<TocEntry> for TocResponse {
    fn from(entry: TocEntry) -> Self {
        Self {
            level: entry.level,
            title: entry.title,
            id: entry.id,
        }
    }
}

impl From<ResolvedContent> for PageResponse {
    fn from(content: ResolvedContent) -> Self {
        Self {
            slug: content.slug,
            title: content.title,
            verse: content.verse_indicator,
            html: content.html,
            toc: content.toc.into_iter().map(TocResponse::from).collect(),
        }
    }
}

/// Handle GET /api/pages/{slug}.
pub(crate) async fn get_page(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let content = state.site.render(&slug)?;

    let etag = compute_etag(&state.version, &content.html);

    // Conditional request
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    Ok((
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
        ],
        Json(PageResponse::from(content)),
    )
        .into_response())
}

/// Compute `ETag` from version and content.
///
/// MD5 truncated to 64 bits (16 hex chars).
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}
