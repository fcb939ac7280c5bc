//! Configuration for the Brave Search client

use crate::error::{Result, VideoSearchError};
use std::fmt;
use std::time::Duration;
use url::Url;

/// Default Brave Search API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.search.brave.com/res/v1";

/// Environment variable holding the subscription token
pub const API_KEY_ENV: &str = "BRAVE_API_KEY";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "BRAVE_API_BASE_URL";

/// Immutable settings a [`BraveClient`](crate::api::BraveClient) is built from
#[derive(Clone)]
pub struct BraveConfig {
    /// Subscription token sent as `X-Subscription-Token`
    pub api_key: String,

    /// API base URL, without the `/videos/search` suffix
    pub base_url: String,

    /// Transport timeout. `None` leaves the HTTP client's default (no timeout).
    pub request_timeout: Option<Duration>,
}

// Keep the subscription token out of debug output.
impl fmt::Debug for BraveConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BraveConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl BraveConfig {
    /// Create a configuration with the default base URL
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> BraveConfigBuilder {
        BraveConfigBuilder::default()
    }

    /// Load from `BRAVE_API_KEY` and optional `BRAVE_API_BASE_URL`
    pub fn from_env() -> Result<Self> {
        Self::builder().with_env().build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(VideoSearchError::Config(format!(
                "Brave Search API key is required (set {API_KEY_ENV})"
            )));
        }

        let url = Url::parse(&self.base_url).map_err(|e| {
            VideoSearchError::Config(format!("Invalid base URL '{}': {e}", self.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(VideoSearchError::Config(format!(
                "Base URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        Ok(())
    }

    /// Full URL of the video search endpoint
    pub fn video_search_url(&self) -> String {
        format!("{}/videos/search", self.base_url.trim_end_matches('/'))
    }
}

/// Builder for BraveConfig
#[derive(Default)]
pub struct BraveConfigBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    request_timeout: Option<Duration>,
}

impl BraveConfigBuilder {
    /// Set the subscription token
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the API base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a transport timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Fill unset fields from the environment
    pub fn with_env(mut self) -> Self {
        if self.api_key.is_none() {
            self.api_key = std::env::var(API_KEY_ENV).ok();
        }
        if self.base_url.is_none() {
            self.base_url = std::env::var(BASE_URL_ENV)
                .ok()
                .filter(|url| !url.trim().is_empty());
        }
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<BraveConfig> {
        let config = BraveConfig {
            api_key: self.api_key.unwrap_or_default(),
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            request_timeout: self.request_timeout,
        };

        config.validate()?;
        Ok(config)
    }
}
