//! Error types for readcache

use thiserror::Error;

/// Result type alias for cache operations
pub type Result<T> = std::result::Result<T, CacheError>;

/// Error types for cache operations
#[derive(Error, Debug)]
pub enum CacheError {
    /// The requested path does not exist at call time
    #[error("File not found: {path}")]
    NotFound { path: String },

    /// The underlying filesystem read or stat failed
    #[error("Cannot read file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// Invalid configuration provided
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error outside the cache itself (file list, output writer)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error from the statistics export
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
