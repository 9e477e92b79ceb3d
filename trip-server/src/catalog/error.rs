//! Catalog error types.

use std::path::PathBuf;

/// Errors that can occur while obtaining a catalog snapshot.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Reading a catalog file failed
    #[error("failed to read catalog file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication failed
    #[error("unauthorized: check TRIP_CATALOG_API_KEY")]
    Unauthorized,

    /// Catalog service returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse catalog JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Cache operation failed
    #[error("cache error: {message}")]
    Cache { message: String },
}
