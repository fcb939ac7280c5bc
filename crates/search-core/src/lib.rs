//! Tool contract for brave-video-search
//!
//! This crate defines the boundary a search tool plugs into: the [`Tool`]
//! trait, the text-content result it returns, a name-keyed [`ToolRegistry`],
//! the [`LogSink`] the hosting server owns, and the shared error type.

pub mod error;
pub mod log;
pub mod output;
pub mod registry;
pub mod tool;

pub use error::{Error, Result};
pub use log::{LogSink, TracingLogSink};
pub use output::{ToolContent, ToolOutput};
pub use registry::ToolRegistry;
pub use tool::Tool;
