//! oEmbed provider implementation.
//!
//! Queries the platform oEmbed endpoint, a stable JSON API that returns
//! title, author and thumbnail for a public video.
//!
//! # Endpoint
//!
//! - oEmbed: `https://www.youtube.com/oembed?url={watch_url}&format=json`
//!
//! oEmbed never exposes streaming URLs, so like the embed page this
//! provider yields an empty-variant result and the chain records an
//! empty decline. Unlisted and private videos come back as 4xx here.

use std::borrow::Cow;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;

use crate::errors::ProviderError;
use crate::models::{ResolvedMedia, VideoId};
use crate::normalize;
use crate::provider::{MediaProvider, USER_AGENT};

const BASE_URL: &str = "https://www.youtube.com";
const PROVIDER_ID: &str = "oembed";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// oEmbed response body, per the published oEmbed JSON shape.
#[derive(Debug, Deserialize)]
struct OembedResponse {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    author_name: Option<String>,
    #[serde(default)]
    thumbnail_url: Option<String>,
}

/// Provider that reads metadata from the oEmbed endpoint.
pub struct OembedProvider {
    client: Client,
}

impl OembedProvider {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    async fn fetch_json(&self, url: &str) -> Result<String, ProviderError> {
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

    fn parse_response(body: &str) -> Result<OembedResponse, ProviderError> {
        serde_json::from_str(body).map_err(|e| ProviderError::Malformed {
            provider: PROVIDER_ID.to_string(),
            message: format!("oEmbed response did not parse: {e}"),
        })
    }
}

impl Default for OembedProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaProvider for OembedProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn resolve(&self, video_id: &VideoId) -> Result<ResolvedMedia, ProviderError> {
        let watch_url = format!("{BASE_URL}/watch?v={video_id}");
        let url = format!(
            "{BASE_URL}/oembed?url={}&format=json",
            urlencoding::encode(&watch_url)
        );

        let body = self.fetch_json(&url).await?;
        let oembed = Self::parse_response(&body)?;

        Ok(ResolvedMedia {
            video_id: video_id.clone(),
            title: oembed.title.map(|t| normalize::clean_title(&t)).filter(|t| !t.is_empty()),
            author: oembed.author_name.filter(|a| !a.is_empty()),
            duration: None,
            thumbnail: oembed
                .thumbnail_url
                .or_else(|| Some(normalize::default_thumbnail(video_id))),
            variants: Vec::new(),
            source: Cow::Borrowed(PROVIDER_ID),
        })
    }
}
