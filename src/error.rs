//! Error handling for pagefetch

use thiserror::Error;

/// Main error type for pagefetch operations
///
/// Display strings double as the in-band `error` messages written to
/// stdout, so the wording of the first two variants is part of the
/// output contract.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid JSON input")]
    Json(#[from] serde_json::Error),

    #[error("Missing URL")]
    MissingUrl,

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// Result type alias for pagefetch operations
pub type Result<T> = std::result::Result<T, FetchError>;
