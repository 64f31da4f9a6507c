//! Error types for drm data parsing and settings.

use thiserror::Error;

/// Errors raised at the input boundary.
///
/// The scheme selection operations themselves never fail; these only cover
/// turning external input into typed records.
#[derive(Debug, Error)]
pub enum DrmError {
    #[error("Unknown drm scheme: {0}")]
    UnknownScheme(String),

    #[error("Invalid drm data: {0}")]
    InvalidDrmData(String),

    #[error("Invalid setting: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for DrmError {
    fn from(e: serde_json::Error) -> Self {
        DrmError::InvalidDrmData(e.to_string())
    }
}
