//! Error types.
//!
//! Editing operations are total: missing ids and out-of-range points resolve
//! to `None` or a no-op. The only typed failures are connection rejections,
//! which the controller drops silently, and settings I/O.

use thiserror::Error;

/// Why a connection was not added to the board
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionRejected {
    /// Both endpoints are the same slot on the same rectangle
    #[error("connection endpoints are the same slot")]
    Degenerate,

    /// An equivalent connection exists in either orientation
    #[error("connection already exists")]
    Duplicate,
}

/// Errors that can occur while loading or saving settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A color value is not a `#rrggbb` hex string
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// A value is out of its allowed range
    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
