//! Error types for video search operations

use thiserror::Error;

/// Video search specific errors
#[derive(Debug, Error)]
pub enum VideoSearchError {
    /// Tool input rejected before any request was sent
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Brave Search answered with a non-success status
    #[error("Brave Search API error {}: {message}", status_label(*status))]
    Upstream {
        /// HTTP status code, when one was received
        status: Option<u16>,
        /// Response body or failure description
        message: String,
    },

    /// Transport failure talking to Brave Search
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON shape
    #[error("Failed to decode Brave Search response: {0}")]
    Decode(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl VideoSearchError {
    /// Whether the failure came from the upstream call rather than our input
    /// or configuration
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream { .. } | Self::Http(_) | Self::Decode(_))
    }

    /// HTTP status attached to the failure, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => *status,
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

fn status_label(status: Option<u16>) -> String {
    status.map_or_else(|| "(no status)".to_string(), |s| s.to_string())
}

/// Result type alias for video search operations
pub type Result<T> = std::result::Result<T, VideoSearchError>;

/// Convert VideoSearchError to search_core::Error
impl From<VideoSearchError> for search_core::Error {
    fn from(err: VideoSearchError) -> Self {
        match err {
            VideoSearchError::Validation(msg) => search_core::Error::InvalidInput(msg),
            VideoSearchError::Config(msg) => search_core::Error::Config(msg),
            other => search_core::Error::ExecutionFailed(other.to_string()),
        }
    }
}
