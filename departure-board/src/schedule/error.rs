//! Schedule loading error types.

use std::path::PathBuf;

/// Errors that can occur while loading a schedule document.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// Reading a local schedule file failed
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote server returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the schedule JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
