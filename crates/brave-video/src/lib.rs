//! Brave Search video search tool
//!
//! Exposes a single [`Tool`](search_core::Tool), `brave_video_search`, that
//! takes a natural-language query, asks the Brave Search video endpoint for
//! matches, and returns a short text summary.
//!
//! - Input is validated before anything is sent: a non-empty `query`, an
//!   optional `count` in 1..=20 (default 10) and an optional `freshness`
//!   (`pd`, `pw`, `pm`, `py` or `YYYY-MM-DDtoYYYY-MM-DD`).
//! - Safe search is always `strict`.
//! - One GET per call, no retries and no caching.
//!
//! # Example
//!
//! ```rust,ignore
//! use brave_video::{BraveConfig, VideoSearchTool};
//! use search_core::Tool;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let tool = VideoSearchTool::new(&BraveConfig::from_env()?)?;
//!     let output = tool.execute(json!({ "query": "rust async", "count": 5 })).await?;
//!     println!("{}", output.as_text());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod options;
pub mod request;
pub mod tools;

// Re-export main types for convenience
pub use api::{BraveClient, VideoResult, VideoSearchResponse};
pub use config::BraveConfig;
pub use error::{Result, VideoSearchError};
pub use format::{PlainTextFormatter, VideoFormatter};
pub use options::{Freshness, SafeSearch, SearchOptions, serialize_options};
pub use request::SearchRequest;
pub use tools::{TOOL_NAME, VideoSearchTool};
