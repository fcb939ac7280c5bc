//! Query options forwarded to the Brave Search video endpoint

use crate::error::VideoSearchError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Expected freshness formats, used in validation messages
pub const FRESHNESS_FORMAT: &str =
    "one of 'pd', 'pw', 'pm', 'py' or a date range 'YYYY-MM-DDtoYYYY-MM-DD'";

static DATE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}to[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date range pattern is valid")
});

/// Discovery-time window for results
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Freshness {
    /// Discovered within the last 24 hours (`pd`)
    PastDay,
    /// Discovered within the last 7 days (`pw`)
    PastWeek,
    /// Discovered within the last 31 days (`pm`)
    PastMonth,
    /// Discovered within the last 365 days (`py`)
    PastYear,
    /// Explicit range, kept verbatim as `YYYY-MM-DDtoYYYY-MM-DD`
    Range(String),
}

impl Freshness {
    /// Value sent as the `freshness` query parameter
    pub fn as_str(&self) -> &str {
        match self {
            Self::PastDay => "pd",
            Self::PastWeek => "pw",
            Self::PastMonth => "pm",
            Self::PastYear => "py",
            Self::Range(range) => range,
        }
    }
}

impl FromStr for Freshness {
    type Err = VideoSearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pd" => Ok(Self::PastDay),
            "pw" => Ok(Self::PastWeek),
            "pm" => Ok(Self::PastMonth),
            "py" => Ok(Self::PastYear),
            range if DATE_RANGE.is_match(range) => Ok(Self::Range(range.to_string())),
            other => Err(VideoSearchError::Validation(format!(
                "invalid freshness '{other}': expected {FRESHNESS_FORMAT}"
            ))),
        }
    }
}

impl fmt::Display for Freshness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upstream adult-content filter level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SafeSearch {
    /// No filtering
    Off,
    /// Filter explicit content
    Moderate,
    /// Drop all adult content
    #[default]
    Strict,
}

impl SafeSearch {
    /// Value sent as the `safesearch` query parameter
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Moderate => "moderate",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for SafeSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options accepted by `/videos/search` besides the query itself
///
/// Only these keys can ever reach the wire; see [`serialize_options`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Two-letter country code results come from
    pub country: Option<String>,
    /// Language of the results
    pub search_lang: Option<String>,
    /// Language of the response UI strings
    pub ui_lang: Option<String>,
    /// Number of results (1-20)
    pub count: Option<u32>,
    /// Zero-based page offset
    pub offset: Option<u32>,
    /// Whether upstream may rewrite the query
    pub spellcheck: Option<bool>,
    /// Content filter level
    pub safesearch: Option<SafeSearch>,
    /// Discovery-time window
    pub freshness: Option<Freshness>,
}

/// Flatten `options` into query pairs
///
/// Keys appear in a fixed order; unset options are dropped rather than sent
/// empty, and every value is rendered as text.
pub fn serialize_options(options: &SearchOptions) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();

    if let Some(country) = &options.country {
        pairs.push(("country", country.clone()));
    }
    if let Some(lang) = &options.search_lang {
        pairs.push(("search_lang", lang.clone()));
    }
    if let Some(lang) = &options.ui_lang {
        pairs.push(("ui_lang", lang.clone()));
    }
    if let Some(count) = options.count {
        pairs.push(("count", count.to_string()));
    }
    if let Some(offset) = options.offset {
        pairs.push(("offset", offset.to_string()));
    }
    if let Some(spellcheck) = options.spellcheck {
        pairs.push(("spellcheck", spellcheck.to_string()));
    }
    if let Some(safesearch) = options.safesearch {
        pairs.push(("safesearch", safesearch.to_string()));
    }
    if let Some(freshness) = &options.freshness {
        pairs.push(("freshness", freshness.to_string()));
    }

    pairs
}
