//! HTTP server for Lectern content sites.
//!
//! This crate serves, using axum:
//! - Server-rendered HTML pages with a navigation sidebar
//! - JSON API endpoints for navigation and page rendering
//!
//! Every request reads the filesystem afresh; there is no cache and no live
//! reload.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::PathBuf;
//! use lectern_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         content_dir: PathBuf::from("content"),
//!         fallback_dirs: vec![PathBuf::from("build/content")],
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum router (lectern-server)
//!                        │
//!                        ├─► HTML routes ──► layout (sidebar + article)
//!                        │
//!                        └─► API routes ──► JSON
//!                                 │
//!                                 └─► Site (tree builder + slug resolver)
//! ```

mod app;
mod error;
mod handlers;
mod layout;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use lectern_site::{ContentRoots, RenderOptions, Site};
use state::AppState;

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Primary content directory.
    pub content_dir: PathBuf,
    /// Directories checked, in order, when the primary lacks a file.
    pub fallback_dirs: Vec<PathBuf>,
    /// Markdown rendering options.
    pub render_options: RenderOptions,
    /// Site title shown in the page header.
    pub site_title: String,
    /// Application version (part of the `ETag`).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            content_dir: PathBuf::from("content"),
            fallback_dirs: Vec::new(),
            render_options: RenderOptions::default(),
            site_title: "Lectern".to_owned(),
            version: String::new(),
        }
    }
}

impl ServerConfig {
    /// Build the site served by this configuration.
    #[must_use]
    pub fn site(&self) -> Site {
        let roots = ContentRoots::new(&self.content_dir, self.fallback_dirs.iter().cloned());
        Site::new(roots, self.render_options)
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid, the port cannot be bound, or
/// the server fails while running.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let state = AppState::new(config.site(), config.site_title.clone(), config.version.clone());
    let app = app::create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|source| ServerError::InvalidAddress {
            host: config.host.clone(),
            port: config.port,
            source,
        })?;
    tracing::info!(
        address = %addr,
        content_dir = %config.content_dir.display(),
        "Starting server"
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from Lectern config.
///
/// # Arguments
///
/// * `config` - Loaded Lectern configuration
/// * `version` - Application version
#[must_use]
pub fn server_config_from_lectern_config(
    config: &lectern_config::Config,
    version: String,
) -> ServerConfig {
    let render = &config.render;
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        content_dir: config.content_resolved.root.clone(),
        fallback_dirs: config.content_resolved.fallback_dirs.clone(),
        render_options: RenderOptions {
            gfm: render.gfm,
            hard_breaks: render.hard_breaks,
            smart_punctuation: render.smart_punctuation,
            heading_anchors: render.heading_anchors,
        },
        site_title: config.site.title.clone(),
        version,
    }
}
