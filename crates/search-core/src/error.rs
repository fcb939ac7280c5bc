//! Error types for tool invocation

use thiserror::Error;

/// Result type alias for tool operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error surfaced to whoever invoked a tool
#[derive(Error, Debug)]
pub enum Error {
    /// The tool input was rejected before any work was done
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The tool ran but could not produce a result
    #[error("Tool execution failed: {0}")]
    ExecutionFailed(String),

    /// No tool is registered under the requested name
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Tool or host configuration is unusable
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether the caller is at fault (bad input or unknown tool)
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::ToolNotFound(_))
    }
}
