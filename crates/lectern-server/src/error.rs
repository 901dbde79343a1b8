//! Error types for the HTTP server.

use std::net::{AddrParseError, SocketAddr};

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lectern_site::ResolveError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Slug did not resolve to any content.
    #[error(transparent)]
    NotFound(#[from] ResolveError),

    /// Host and port do not form a socket address.
    #[error("Invalid listen address {host}:{port}: {source}")]
    InvalidAddress {
        host: String,
        port: u16,
        #[source]
        source: AddrParseError,
    },

    /// Listener could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// I/O error while serving.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::NotFound(e) => (
                StatusCode::NOT_FOUND,
                json!({"error": e.to_string(), "slug": e.slug()}),
            ),
            Self::InvalidAddress { .. } | Self::Bind { .. } | Self::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": self.to_string()}),
            ),
        };

        (status, Json(body)).into_response()
    }
}
