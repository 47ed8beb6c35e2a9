//! Mirror-instance provider implementation.
//!
//! Queries community-run mirror frontends that re-expose video metadata
//! and direct stream URLs over a public JSON API.
//!
//! # Endpoint
//!
//! - Video lookup: `{instance}/api/v1/videos/{id}`
//!
//! Instances are tried in order; the first one whose response parses is
//! taken, even when it lists no streams (the chain classifies an empty
//! result as a decline). Instance URLs supplied without a scheme are
//! normalized to `https://`.

use std::borrow::Cow;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;

use crate::errors::ProviderError;
use crate::models::{MediaVariant, ResolvedMedia, VideoId};
use crate::normalize;
use crate::provider::{MediaProvider, USER_AGENT};

const PROVIDER_ID: &str = "mirror";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Mirror instances queried when the operator configures none.
pub const DEFAULT_MIRROR_INSTANCES: [&str; 3] = [
    "https://invidious.snopyta.org",
    "https://yewtu.be",
    "https://inv.nadeko.net",
];

/// Video document returned by the mirror API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MirrorVideo {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    author: Option<String>,
    /// Length in seconds.
    #[serde(default)]
    duration: Option<u64>,
    #[serde(default)]
    format_streams: Vec<MirrorStream>,
    #[serde(default)]
    video_thumbnails: Vec<MirrorThumbnail>,
}

#[derive(Debug, Deserialize)]
struct MirrorStream {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    quality: Option<String>,
    #[serde(rename = "type", default)]
    mime_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MirrorThumbnail {
    #[serde(default)]
    url: Option<String>,
}

impl MirrorStream {
    /// Convert a wire stream into a normalized variant.
    ///
    /// Streams without a URL are dropped.
    fn to_variant(self) -> Option<MediaVariant> {
        let url = self.url.filter(|u| !u.is_empty())?;

        let mime_type = self
            .mime_type
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "video/mp4".to_string());
        let is_audio_only = normalize::is_audio_only(&mime_type, false);

        Some(MediaVariant {
            quality: normalize::quality_label(self.quality.as_deref(), None),
            url,
            mime_type,
            width: None,
            height: None,
            fps: None,
            is_audio_only,
        })
    }
}

impl MirrorVideo {
    fn into_media(self, video_id: &VideoId) -> ResolvedMedia {
        let variants: Vec<MediaVariant> = self
            .format_streams
            .into_iter()
            .filter_map(MirrorStream::to_variant)
            .collect();

        let thumbnail = self
            .video_thumbnails
            .into_iter()
            .find_map(|t| t.url.filter(|u| !u.is_empty()))
            .or_else(|| Some(normalize::default_thumbnail(video_id)));

        ResolvedMedia {
            video_id: video_id.clone(),
            title: self.title.filter(|t| !t.is_empty()),
            author: self.author.filter(|a| !a.is_empty()),
            duration: self
                .duration
                .filter(|&d| d > 0)
                .map(normalize::format_duration),
            thumbnail,
            variants,
            source: Cow::Borrowed(PROVIDER_ID),
        }
    }
}

/// Provider that walks a list of mirror instances in order.
pub struct MirrorProvider {
    client: Client,
    instances: Vec<String>,
}

impl MirrorProvider {
    pub fn new(instances: Vec<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        let instances = instances
            .iter()
            .filter_map(|raw| Self::normalize_instance(raw))
            .collect();

        Self { client, instances }
    }

    /// Trim the instance URL and default the scheme to `https://`.
    fn normalize_instance(raw: &str) -> Option<String> {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return None;
        }

        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Some(trimmed.to_string())
        } else {
            Some(format!("https://{trimmed}"))
        }
    }

    async fn fetch_video(&self, url: &str) -> Result<MirrorVideo, ProviderError> {
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

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ProviderError::Malformed {
            provider: PROVIDER_ID.to_string(),
            message: format!("mirror response did not parse: {e}"),
        })
    }
}

impl Default for MirrorProvider {
    fn default() -> Self {
        Self::new(
            DEFAULT_MIRROR_INSTANCES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }
}

#[async_trait]
impl MediaProvider for MirrorProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn resolve(&self, video_id: &VideoId) -> Result<ResolvedMedia, ProviderError> {
        let mut last_error: Option<ProviderError> = None;

        for instance in &self.instances {
            let url = format!("{instance}/api/v1/videos/{video_id}");

            match self.fetch_video(&url).await {
                Ok(video) => return Ok(video.into_media(video_id)),
                Err(e) => {
                    log::debug!("Mirror instance {} failed: {}", instance, e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| ProviderError::Malformed {
            provider: PROVIDER_ID.to_string(),
            message: "no mirror instances configured".to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video_id(raw: &str) -> VideoId {
        VideoId::new(raw).unwrap()
    }

    #[test]
    fn test_normalizes_schemeless_instance() {
        assert_eq!(
            MirrorProvider::normalize_instance("inv.nadeko.net").as_deref(),
            Some("https://inv.nadeko.net")
        );
        assert_eq!(
            MirrorProvider::normalize_instance("https://yewtu.be/").as_deref(),
            Some("https://yewtu.be")
        );
        assert_eq!(
            MirrorProvider::normalize_instance("http://localhost:3001").as_deref(),
            Some("http://localhost:3001")
        );
        assert_eq!(MirrorProvider::normalize_instance("  "), None);
    }

    #[test]
    fn test_converts_full_document() {
        let body = r#"{
            "title": "Some Great Video",
            "author": "Some Channel",
            "duration": 125,
            "formatStreams": [
                {
                    "url": "https://yewtu.be/latest_version?id=abc123&itag=22",
                    "quality": "720p",
                    "type": "video/mp4; codecs=\"avc1.64001F, mp4a.40.2\""
                },
                {
                    "quality": "360p",
                    "type": "video/mp4"
                }
            ],
            "videoThumbnails": [
                { "url": "https://yewtu.be/vi/abc123/maxres.jpg" }
            ]
        }"#;

        let video: MirrorVideo = serde_json::from_str(body).unwrap();
        let media = video.into_media(&video_id("abc123"));

        assert_eq!(media.title.as_deref(), Some("Some Great Video"));
        assert_eq!(media.author.as_deref(), Some("Some Channel"));
        assert_eq!(media.duration.as_deref(), Some("2:05"));
        assert_eq!(
            media.thumbnail.as_deref(),
            Some("https://yewtu.be/vi/abc123/maxres.jpg")
        );

        // The streamless entry is dropped.
        assert_eq!(media.variants.len(), 1);
        assert_eq!(media.variants[0].quality, "720p");
        assert!(!media.variants[0].is_audio_only);
        assert_eq!(media.source, "mirror");
    }

    #[test]
    fn test_empty_document_yields_empty_variants() {
        let video: MirrorVideo = serde_json::from_str("{}").unwrap();
        let media = video.into_media(&video_id("abc123"));

        assert!(media.variants.is_empty());
        assert!(!media.has_variants());
        assert_eq!(media.title, None);
        assert_eq!(
            media.thumbnail.as_deref(),
            Some("https://i.ytimg.com/vi/abc123/maxresdefault.jpg")
        );
    }

    #[test]
    fn test_missing_quality_falls_back_to_unknown() {
        let stream = MirrorStream {
            url: Some("https://yewtu.be/latest_version?id=abc123".to_string()),
            quality: None,
            mime_type: None,
        };

        let variant = stream.to_variant().unwrap();
        assert_eq!(variant.quality, "unknown");
        assert_eq!(variant.mime_type, "video/mp4");
    }

    #[tokio::test]
    async fn test_no_instances_is_malformed() {
        let provider = MirrorProvider::new(Vec::new());
        let err = provider.resolve(&video_id("abc123")).await.unwrap_err();

        assert!(matches!(err, ProviderError::Malformed { .. }));
        assert!(err.to_string().contains("no mirror instances"));
    }
}
