//! Command-line host for the Brave Search video tool

use anyhow::Context;
use brave_video::config::{API_KEY_ENV, BASE_URL_ENV};
use brave_video::{BraveConfig, TOOL_NAME, VideoSearchTool};
use clap::Parser;
use search_core::ToolRegistry;
use search_utils::{LogFormat, LoggingConfig};
use serde_json::{Map, Value, json};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "brave-video")]
#[command(about = "Search videos with the Brave Search API", long_about = None)]
struct Args {
    /// Search terms
    query: String,

    /// Number of results (1-20)
    #[arg(short, long)]
    count: Option<i64>,

    /// Discovery window: pd, pw, pm, py or YYYY-MM-DDtoYYYY-MM-DD
    #[arg(short, long)]
    freshness: Option<String>,

    /// Brave Search subscription token
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: String,

    /// API base URL
    #[arg(long, env = BASE_URL_ENV)]
    base_url: Option<String>,

    /// Transport timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Print the raw tool output as JSON
    #[arg(long)]
    json: bool,

    /// Log output format (pretty or json)
    #[arg(long)]
    log_format: Option<LogFormat>,
}

impl Args {
    fn tool_params(&self) -> Value {
        let mut params = Map::new();
        params.insert("query".to_string(), json!(self.query));
        if let Some(count) = self.count {
            params.insert("count".to_string(), json!(count));
        }
        if let Some(freshness) = &self.freshness {
            params.insert("freshness".to_string(), json!(freshness));
        }
        Value::Object(params)
    }

    fn brave_config(&self) -> brave_video::Result<BraveConfig> {
        let mut builder = BraveConfig::builder().api_key(&self.api_key);
        if let Some(url) = &self.base_url {
            builder = builder.base_url(url);
        }
        if let Some(secs) = self.timeout_secs {
            builder = builder.request_timeout(Duration::from_secs(secs));
        }
        builder.build()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logging = LoggingConfig::from_env();
    if let Some(format) = args.log_format {
        logging = logging.with_format(format);
    }
    search_utils::init_tracing_with(&logging);

    let config = args.brave_config().context("invalid Brave Search configuration")?;
    let tool = VideoSearchTool::new(&config)?;

    let registry = ToolRegistry::new();
    registry.register(Arc::new(tool));

    info!(tool = TOOL_NAME, query = %args.query, "Running video search");
    let output = registry
        .call(TOOL_NAME, args.tool_params())
        .await
        .context("video search failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", output.as_text());
    }

    Ok(())
}
