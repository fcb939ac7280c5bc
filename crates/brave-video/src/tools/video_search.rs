//! Tool for searching videos through Brave Search

use async_trait::async_trait;
use search_core::{LogSink, Result as ToolResult, Tool, ToolOutput, TracingLogSink};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info};

use crate::api::{BraveClient, VideoSearchResponse};
use crate::config::BraveConfig;
use crate::error::Result;
use crate::format::{PlainTextFormatter, VideoFormatter};
use crate::request::{DEFAULT_COUNT, MAX_COUNT, SearchRequest};

/// Name the tool is registered under
pub const TOOL_NAME: &str = "brave_video_search";

/// Message returned when upstream has no results for `query`
pub fn no_results_message(query: &str) -> String {
    format!("No video results found for \"{query}\"")
}

/// Tool for searching videos
pub struct VideoSearchTool {
    client: BraveClient,
    log: Arc<dyn LogSink>,
    formatter: Arc<dyn VideoFormatter>,
}

impl VideoSearchTool {
    /// Create a new video search tool
    pub fn new(config: &BraveConfig) -> Result<Self> {
        Ok(Self::with_client(BraveClient::new(config)?))
    }

    /// Create a tool around an existing client
    pub fn with_client(client: BraveClient) -> Self {
        Self {
            client,
            log: Arc::new(TracingLogSink),
            formatter: Arc::new(PlainTextFormatter),
        }
    }

    /// Route informational messages to the host's log sink
    pub fn with_log_sink(mut self, log: Arc<dyn LogSink>) -> Self {
        self.log = log;
        self
    }

    /// Replace the result formatter
    pub fn with_formatter(mut self, formatter: Arc<dyn VideoFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Validate raw tool arguments
    pub fn validate(&self, params: Value) -> Result<SearchRequest> {
        SearchRequest::from_value(params)
    }

    /// Run a validated search against Brave Search
    pub async fn search(&self, request: &SearchRequest) -> Result<VideoSearchResponse> {
        debug!(
            query = request.query(),
            count = request.count(),
            freshness = request.freshness().map(|f| f.as_str()),
            "Searching videos"
        );
        self.client
            .video_search(request.query(), &request.to_options())
            .await
    }

    /// Validate, search, and render the results as text
    pub async fn run(&self, params: Value) -> Result<String> {
        let request = self.validate(params)?;
        let response = self.search(&request).await?;

        if response.is_empty() {
            let message = no_results_message(request.query());
            self.log.log(&message);
            return Ok(message);
        }

        info!(
            query = request.query(),
            results = response.results().len(),
            "Video search returned results"
        );
        Ok(self.formatter.format_video_results(response.results()))
    }
}

#[async_trait]
impl Tool for VideoSearchTool {
    async fn execute(&self, params: Value) -> ToolResult<ToolOutput> {
        let text = self.run(params).await?;
        Ok(ToolOutput::text(text))
    }

    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "Searches for videos using the Brave Search API. Use this for video content, \
         tutorials, or any media-related queries. Returns a list of videos with titles, \
         URLs, descriptions and video details. Maximum 20 results per request."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The term to search the internet for videos of"
                },
                "count": {
                    "type": "integer",
                    "description": "The number of results to return, minimum 1, maximum 20",
                    "minimum": 1,
                    "maximum": MAX_COUNT,
                    "default": DEFAULT_COUNT
                },
                "freshness": {
                    "type": "string",
                    "description": "Filters by discovery time: 'pd' (last 24 hours), 'pw' (last 7 days), \
                                    'pm' (last 31 days), 'py' (last 365 days), or a date range \
                                    'YYYY-MM-DDtoYYYY-MM-DD'"
                }
            },
            "required": ["query"]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        Sink {}
        impl LogSink for Sink {
            fn log(&self, message: &str);
        }
    }

    fn offline_tool() -> VideoSearchTool {
        // Nothing listens on port 9; validation failures must never reach it.
        let config = BraveConfig::builder()
            .api_key("test_key")
            .base_url("http://127.0.0.1:9")
            .build()
            .unwrap();
        VideoSearchTool::new(&config).unwrap()
    }

    #[test]
    fn test_tool_metadata() {
        let tool = offline_tool();
        assert_eq!(tool.name(), "brave_video_search");

        let schema = tool.input_schema();
        assert_eq!(schema["required"], json!(["query"]));
        assert_eq!(schema["properties"]["count"]["maximum"], 20);
        assert_eq!(schema["properties"]["count"]["default"], 10);
    }

    #[test]
    fn test_no_results_message() {
        assert_eq!(
            no_results_message("xyz123notfound"),
            "No video results found for \"xyz123notfound\""
        );
    }

    #[tokio::test]
    async fn test_invalid_count_fails_before_request() {
        let mut sink = MockSink::new();
        sink.expect_log().never();
        let tool = offline_tool().with_log_sink(Arc::new(sink));

        let err = tool
            .execute(json!({ "query": "x", "count": 25 }))
            .await
            .unwrap_err();
        assert!(matches!(err, search_core::Error::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_bad_freshness_names_format() {
        let tool = offline_tool();
        let err = tool
            .execute(json!({ "query": "x", "freshness": "last-week" }))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("YYYY-MM-DDtoYYYY-MM-DD"));
    }
}
