//! Validated tool input

use crate::error::{Result, VideoSearchError};
use crate::options::{Freshness, SafeSearch, SearchOptions};
use serde::Deserialize;
use serde_json::{Number, Value};

/// Results returned when the caller does not ask for a count
pub const DEFAULT_COUNT: u32 = 10;

/// Largest count the endpoint accepts
pub const MAX_COUNT: u32 = 20;

/// Raw arguments as they arrive from the caller
#[derive(Debug, Deserialize)]
struct VideoSearchParams {
    query: String,
    #[serde(default)]
    count: Option<Number>,
    #[serde(default)]
    freshness: Option<String>,
}

/// Accept JSON integers and floats with no fractional part (`10.0`)
#[allow(clippy::cast_possible_truncation)]
fn integral_count(n: &Number) -> Result<i64> {
    if let Some(i) = n.as_i64() {
        return Ok(i);
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() <= f64::from(u32::MAX) => Ok(f as i64),
        _ => Err(VideoSearchError::Validation(format!(
            "count must be an integer between 1 and {MAX_COUNT}, got {n}"
        ))),
    }
}

/// A validated video search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    query: String,
    count: u32,
    freshness: Option<Freshness>,
}

impl SearchRequest {
    /// Validate typed arguments
    ///
    /// `count` defaults to [`DEFAULT_COUNT`]. An empty `freshness` string is
    /// treated as absent.
    pub fn new(query: impl Into<String>, count: Option<i64>, freshness: Option<&str>) -> Result<Self> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(VideoSearchError::Validation(
                "query must be a non-empty string".to_string(),
            ));
        }

        let count = match count {
            None => DEFAULT_COUNT,
            Some(n) => u32::try_from(n)
                .ok()
                .filter(|n| (1..=MAX_COUNT).contains(n))
                .ok_or_else(|| {
                    VideoSearchError::Validation(format!(
                        "count must be an integer between 1 and {MAX_COUNT}, got {n}"
                    ))
                })?,
        };

        let freshness = freshness
            .filter(|f| !f.is_empty())
            .map(str::parse::<Freshness>)
            .transpose()?;

        Ok(Self {
            query,
            count,
            freshness,
        })
    }

    /// Validate raw JSON tool arguments
    pub fn from_value(params: Value) -> Result<Self> {
        let params: VideoSearchParams = serde_json::from_value(params)
            .map_err(|e| VideoSearchError::Validation(format!("Invalid parameters: {e}")))?;

        let count = params.count.as_ref().map(integral_count).transpose()?;
        Self::new(params.query, count, params.freshness.as_deref())
    }

    /// The search terms
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of results requested, always within 1..=20
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Requested discovery window
    pub fn freshness(&self) -> Option<&Freshness> {
        self.freshness.as_ref()
    }

    /// Options to forward upstream
    ///
    /// Safe search is pinned to [`SafeSearch::Strict`] and is not
    /// caller-controlled.
    pub fn to_options(&self) -> SearchOptions {
        SearchOptions {
            count: Some(self.count),
            safesearch: Some(SafeSearch::Strict),
            freshness: self.freshness.clone(),
            ..Default::default()
        }
    }
}
