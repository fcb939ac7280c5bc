//! Brave Search API client and response types

pub mod client;
pub mod types;

pub use client::{BraveClient, SUBSCRIPTION_TOKEN_HEADER};
pub use types::{MetaUrl, Profile, QueryInfo, Thumbnail, VideoData, VideoResult, VideoSearchResponse};
