//! Error types for share-page extraction.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    /// The provider's chat markup never appeared within the readiness
    /// timeout. Covers both slow pages and pages that require sign-in.
    #[error("chat content not found within {timeout:?}")]
    ContentNotFound { timeout: Duration },

    /// The output directory could not be created or scanned.
    #[error("output directory unavailable: {}", .path.display())]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The browser session failed outside the readiness wait.
    #[error("browser session error: {0}")]
    Session(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
