//! Log sink owned by the hosting server

/// Destination for informational messages a tool wants the host to record
///
/// Tools hold an `Arc<dyn LogSink>` so the host decides where messages end
/// up (stderr, an MCP logging notification, a test double).
pub trait LogSink: Send + Sync {
    /// Record a single message
    fn log(&self, message: &str);
}

/// [`LogSink`] that forwards every message to `tracing` at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn log(&self, message: &str) {
        tracing::info!(target: "search_tool", "{message}");
    }
}
