// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReindexError>;

#[derive(Error, Debug)]
pub enum ReindexError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing required configuration: {name}\n  hint: {hint}")]
    MissingConfig { name: &'static str, hint: String },

    #[error("Failed to read seed file {path}: {source}")]
    SeedRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse seed file {path}: {source}")]
    SeedParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Search API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ReindexError {
    /// True for errors raised before any document work starts.
    pub fn is_fatal_config(&self) -> bool {
        matches!(self, Self::Config(_) | Self::MissingConfig { .. })
    }
}
