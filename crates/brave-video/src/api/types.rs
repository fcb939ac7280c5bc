//! Response types for the Brave Search video endpoint
//!
//! Only `title` and `url` are relied on. Everything else upstream may omit,
//! so it is optional here; the subscription flag, tags and author in
//! particular are not guaranteed on every result.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize an explicit `null` the same way as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of a `/videos/search` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoSearchResponse {
    /// Result type marker, `"video"` for this endpoint
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,

    /// The query as upstream understood it
    #[serde(default)]
    pub query: Option<QueryInfo>,

    /// Results in relevance order; missing and `null` both mean none
    #[serde(default)]
    pub results: Option<Vec<VideoResult>>,
}

impl VideoSearchResponse {
    /// Results in upstream order, empty when none were returned
    pub fn results(&self) -> &[VideoResult] {
        self.results.as_deref().unwrap_or_default()
    }

    /// Whether upstream found nothing
    pub fn is_empty(&self) -> bool {
        self.results().is_empty()
    }
}

/// Echoed query details
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryInfo {
    /// Query as sent
    #[serde(default, deserialize_with = "null_as_default")]
    pub original: String,
    /// Spellchecked rewrite, if upstream applied one
    #[serde(default)]
    pub altered: Option<String>,
    /// Whether spellcheck was disabled
    #[serde(default)]
    pub spellcheck_off: Option<bool>,
    /// Whether strict safe search hid results
    #[serde(default)]
    pub show_strict_warning: Option<bool>,
}

/// One video hit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoResult {
    /// Result kind, usually `"video_result"`
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Video page URL
    pub url: String,
    /// Video title
    pub title: String,
    /// Short description
    #[serde(default)]
    pub description: Option<String>,
    /// Human-readable age, e.g. "2 days ago"
    #[serde(default)]
    pub age: Option<String>,
    /// Publication date of the page
    #[serde(default)]
    pub page_age: Option<String>,
    /// Page-level thumbnail
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
    /// Video-specific details
    #[serde(default, deserialize_with = "null_as_default")]
    pub video: VideoData,
    /// Host site metadata
    #[serde(default)]
    pub meta_url: Option<MetaUrl>,
}

/// Video-specific payload of a result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoData {
    /// Running time, e.g. "12:34"
    #[serde(default)]
    pub duration: Option<String>,
    /// View count
    #[serde(default)]
    pub views: Option<u64>,
    /// Channel or creator name
    #[serde(default)]
    pub creator: Option<String>,
    /// Hosting publisher, e.g. "YouTube"
    #[serde(default)]
    pub publisher: Option<String>,
    /// Video thumbnail
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
    /// Whether watching requires a paid subscription
    #[serde(default)]
    pub requires_subscription: Option<bool>,
    /// Topic tags
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Uploader profile
    #[serde(default)]
    pub author: Option<Profile>,
}

/// Thumbnail image reference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Thumbnail {
    /// Proxied image URL
    #[serde(default, deserialize_with = "null_as_default")]
    pub src: String,
    /// Original image URL
    #[serde(default)]
    pub original: Option<String>,
}

/// Metadata about the site hosting a result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetaUrl {
    /// URL scheme, e.g. "https"
    #[serde(default)]
    pub scheme: Option<String>,
    /// Host with port, as it appears in the URL
    #[serde(default)]
    pub netloc: Option<String>,
    /// Bare host name
    #[serde(default)]
    pub hostname: Option<String>,
    /// Site favicon URL
    #[serde(default)]
    pub favicon: Option<String>,
    /// Display path, e.g. "› watch"
    #[serde(default)]
    pub path: Option<String>,
}

/// Uploader profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    /// Display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Long form name
    #[serde(default)]
    pub long_name: Option<String>,
    /// Profile URL
    #[serde(default)]
    pub url: Option<String>,
    /// Avatar URL
    #[serde(default)]
    pub img: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_result() {
        let body = json!({
            "type": "video",
            "query": { "original": "rust async", "spellcheck_off": false },
            "results": [{
                "type": "video_result",
                "url": "https://www.youtube.com/watch?v=abc",
                "title": "Async Rust in 10 minutes",
                "description": "A quick tour",
                "age": "2 days ago",
                "thumbnail": { "src": "https://imgs.example/abc.jpg" },
                "video": {
                    "duration": "10:02",
                    "views": 12345,
                    "creator": "Rustacean Station",
                    "publisher": "YouTube",
                    "requires_subscription": false,
                    "tags": ["rust", "async"],
                    "author": { "name": "rustacean", "url": "https://www.youtube.com/@rustacean" }
                },
                "meta_url": { "hostname": "www.youtube.com" }
            }]
        });

        let response: VideoSearchResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.kind, "video");
        assert_eq!(response.query.unwrap().original, "rust async");

        let result = &response.results.unwrap()[0];
        assert_eq!(result.video.views, Some(12345));
        assert_eq!(result.video.requires_subscription, Some(false));
        assert_eq!(result.video.tags.as_deref(), Some(&["rust".to_string(), "async".to_string()][..]));
        assert_eq!(result.video.author.as_ref().unwrap().name, "rustacean");
    }

    #[test]
    fn test_parse_without_extended_fields() {
        let body = json!({
            "type": "video",
            "results": [{
                "url": "https://example.com/v",
                "title": "Plain",
                "video": { "duration": "1:00", "views": 1, "creator": "someone" }
            }]
        });

        let response: VideoSearchResponse = serde_json::from_value(body).unwrap();
        let video = &response.results()[0].video;
        assert!(video.requires_subscription.is_none());
        assert!(video.tags.is_none());
        assert!(video.author.is_none());
    }

    #[test]
    fn test_missing_or_null_results_are_empty() {
        let missing: VideoSearchResponse = serde_json::from_value(json!({ "type": "video" })).unwrap();
        assert!(missing.is_empty());

        let null: VideoSearchResponse =
            serde_json::from_value(json!({ "type": "video", "results": null })).unwrap();
        assert!(null.is_empty());
    }

    #[test]
    fn test_null_fields_tolerated() {
        let body = json!({
            "type": null,
            "query": { "original": null },
            "results": [
                {
                    "type": null,
                    "url": "https://example.com/a",
                    "title": "a",
                    "thumbnail": { "src": null },
                    "video": null
                },
                {
                    "url": "https://example.com/b",
                    "title": "b",
                    "video": {
                        "duration": null,
                        "views": null,
                        "tags": null,
                        "author": { "name": null, "url": null },
                        "thumbnail": { "src": null, "original": null }
                    },
                    "meta_url": null
                }
            ]
        });

        let response: VideoSearchResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.kind, "");
        assert_eq!(response.query.as_ref().unwrap().original, "");

        let results = response.results();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].thumbnail.as_ref().unwrap().src, "");
        assert!(results[0].video.duration.is_none());
        assert_eq!(results[1].video.author.as_ref().unwrap().name, "");
        assert!(results[1].video.views.is_none());
    }

    #[test]
    fn test_result_without_video_payload() {
        let body = json!({ "results": [{ "url": "https://example.com", "title": "t" }] });
        let response: VideoSearchResponse = serde_json::from_value(body).unwrap();
        assert!(response.results()[0].video.duration.is_none());
    }
}
