//! HTTP client for the Brave Search video endpoint

use super::types::VideoSearchResponse;
use crate::config::BraveConfig;
use crate::error::{Result, VideoSearchError};
use crate::options::{SearchOptions, serialize_options};
use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_ENCODING, HeaderMap, HeaderValue};
use tracing::{debug, instrument, warn};

/// Header carrying the subscription token
pub const SUBSCRIPTION_TOKEN_HEADER: &str = "X-Subscription-Token";

/// Brave Search API client
///
/// Holds only immutable configuration and a connection pool, so a single
/// instance can serve concurrent searches.
#[derive(Debug, Clone)]
pub struct BraveClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl BraveClient {
    /// Create a client from a validated configuration
    pub fn new(config: &BraveConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| VideoSearchError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self::with_client(client, config))
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_client(client: Client, config: &BraveConfig) -> Self {
        Self {
            client,
            endpoint: config.video_search_url(),
            api_key: config.api_key.clone(),
        }
    }

    /// URL requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));

        let mut token = HeaderValue::from_str(&self.api_key)
            .map_err(|e| VideoSearchError::Config(format!("Invalid API key header value: {e}")))?;
        token.set_sensitive(true);
        headers.insert(SUBSCRIPTION_TOKEN_HEADER, token);

        Ok(headers)
    }

    /// Search videos for `query`
    ///
    /// Issues exactly one GET; failures are returned as-is without retrying.
    #[instrument(skip(self, options), fields(endpoint = %self.endpoint))]
    pub async fn video_search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<VideoSearchResponse> {
        let mut params = vec![("q", query.to_string())];
        params.extend(serialize_options(options));
        debug!(?params, "Sending video search request");

        let response = self
            .client
            .get(&self.endpoint)
            .headers(self.build_headers()?)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read response body: {e}>"));
            warn!(status = status.as_u16(), "Brave Search request failed");
            return Err(VideoSearchError::Upstream {
                status: Some(status.as_u16()),
                message: body,
            });
        }

        let body = response.text().await?;
        let parsed: VideoSearchResponse = serde_json::from_str(&body)
            .map_err(|e| VideoSearchError::Decode(e.to_string()))?;

        debug!(results = parsed.results().len(), "Video search succeeded");
        Ok(parsed)
    }
}
