//! Search tools for LLM agents

pub mod video_search;

pub use video_search::{TOOL_NAME, VideoSearchTool, no_results_message};
