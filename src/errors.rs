//! Unified error type for the whole crate.
//!
//! Load-time failures (missing or malformed dataset, unreachable store) are
//! terminal for the process. Request-time failures are mapped to HTTP status
//! codes by the `web` layer.

use thiserror::Error;

/// All errors produced by the application.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or unreadable configuration value
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Any storage-layer failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// The seed dataset file does not exist
    #[error("Dataset not found: {path}")]
    MissingDataset {
        /// Path that was looked up
        path: String,
    },

    /// The seed dataset could not be parsed or has the wrong shape
    #[error("Malformed dataset: {message}")]
    MalformedDataset {
        /// What was wrong with the dataset
        message: String,
    },

    /// A recommendation limit outside the accepted range
    #[error("Invalid recommendation limit: {limit}")]
    InvalidLimit {
        /// The rejected limit
        limit: u64,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Listen address could not be parsed
    #[error("Invalid listen address: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    /// Shorthand for building a [`Error::MalformedDataset`].
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedDataset {
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
