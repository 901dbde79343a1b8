//! Navigation API endpoint.
//!
//! Returns the content tree, rebuilt from disk on every request.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use lectern_site::ContentNode;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    /// Navigation tree items.
    items: Vec<ContentNode>,
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(State(state): State<Arc<AppState>>) -> Json<NavigationResponse> {
    let items = state.site.navigation();
    Json(NavigationResponse { items })
}
