//! Embed-page provider implementation.
//!
//! Fetches the platform embed page and reads the `yt.setConfig({...})`
//! bootstrap JSON, whose URL-encoded `VIDEO_INFO` blob carries the title.
//!
//! # Endpoint
//!
//! - Embed page: `https://www.youtube.com/embed/{id}`
//!
//! The embed page exposes metadata only, never streaming URLs, so this
//! provider always yields an empty-variant result and the chain classifies
//! it as an empty decline. It stays in the chain because it documents the
//! upstream surface and keeps the metadata path exercised.

use std::borrow::Cow;
use std::time::Duration;

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::{header, Client};
use serde::Deserialize;

use crate::errors::ProviderError;
use crate::models::{ResolvedMedia, VideoId};
use crate::normalize;
use crate::provider::player::form_value;
use crate::provider::{MediaProvider, USER_AGENT};

const BASE_URL: &str = "https://www.youtube.com";
const PROVIDER_ID: &str = "embed";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

lazy_static! {
    static ref SET_CONFIG_PATTERN: Regex = Regex::new(r"yt\.setConfig\((\{.+?\})\);").unwrap();
}

/// Bootstrap config embedded in the embed page.
#[derive(Debug, Deserialize)]
struct EmbedConfig {
    /// URL-encoded form string; its `title` key holds the video title.
    #[serde(rename = "VIDEO_INFO", default)]
    video_info: Option<String>,
}

/// Provider that reads metadata from the embed page bootstrap config.
pub struct EmbedProvider {
    client: Client,
}

impl EmbedProvider {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    async fn fetch_html(&self, url: &str) -> Result<String, ProviderError> {
        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !response.status().is_success() {
            return Err(ProviderError::UpstreamStatus {
                provider: PROVIDER_ID.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    /// Pull the video title out of the setConfig bootstrap JSON.
    fn extract_title(html: &str) -> Result<Option<String>, ProviderError> {
        let block = SET_CONFIG_PATTERN
            .captures(html)
            .and_then(|captures| captures.get(1))
            .ok_or_else(|| ProviderError::Malformed {
                provider: PROVIDER_ID.to_string(),
                message: "setConfig block not found in page".to_string(),
            })?;

        let config: EmbedConfig =
            serde_json::from_str(block.as_str()).map_err(|e| ProviderError::Malformed {
                provider: PROVIDER_ID.to_string(),
                message: format!("setConfig block did not parse: {e}"),
            })?;

        Ok(config
            .video_info
            .as_deref()
            .and_then(|info| form_value(info, "title"))
            .filter(|title| !title.is_empty()))
    }
}

impl Default for EmbedProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaProvider for EmbedProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn resolve(&self, video_id: &VideoId) -> Result<ResolvedMedia, ProviderError> {
        let url = format!("{BASE_URL}/embed/{video_id}");
        let html = self.fetch_html(&url).await?;
        let title = Self::extract_title(&html)?;

        Ok(ResolvedMedia {
            video_id: video_id.clone(),
            title,
            author: None,
            duration: None,
            thumbnail: Some(normalize::default_thumbnail(video_id)),
            variants: Vec::new(),
            source: Cow::Borrowed(PROVIDER_ID),
        })
    }
}
