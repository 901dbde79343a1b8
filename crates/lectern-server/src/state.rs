//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use lectern_site::Site;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Navigation and slug resolution.
    pub(crate) site: Site,
    /// Site title for the HTML shell.
    pub(crate) site_title: String,
    /// Application version for `ETag` computation.
    pub(crate) version: String,
}

impl AppState {
    pub(crate) fn new(site: Site, site_title: String, version: String) -> Arc<Self> {
        Arc::new(Self {
            site,
            site_title,
            version,
        })
    }
}
