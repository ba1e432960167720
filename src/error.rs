//! Error types for feed loading and clipboard access.
//!
//! The feed view itself never fails: empty or missing data renders as an
//! empty state. Errors here cover the boundaries: file IO, HTTP, JSON
//! decoding, and the system clipboard.

use std::path::PathBuf;

/// Unified error type for the fallible edges of the application.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Reading the feed file failed.
    #[error("failed to read feed file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fetching the feed over HTTP failed.
    #[error("failed to fetch feed: {0}")]
    Http(#[from] reqwest::Error),

    /// The feed body was not valid JSON or did not match the post schema.
    #[error("failed to parse feed: {0}")]
    Parse(#[from] serde_json::Error),

    /// The server answered with a non-success status.
    #[error("feed request returned HTTP {0}")]
    HttpStatus(u16),

    /// System clipboard access failed.
    #[error("clipboard error: {0}")]
    Clipboard(String),
}

impl FeedError {
    /// Short message suitable for the snackbar.
    pub fn user_message(&self) -> String {
        match self {
            FeedError::Io { .. } => "could not read feed file".to_string(),
            FeedError::Http(_) | FeedError::HttpStatus(_) => "could not fetch feed".to_string(),
            FeedError::Parse(_) => "feed data is malformed".to_string(),
            FeedError::Clipboard(_) => "clipboard unavailable".to_string(),
        }
    }
}
