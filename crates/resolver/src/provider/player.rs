//! Wire structs for the platform's embedded player response.
//!
//! Watch pages carry a `ytInitialPlayerResponse` JSON object whose
//! `streamingData` section lists direct renditions (`formats`) and
//! split audio/video renditions (`adaptiveFormats`). All fields are
//! optional on the wire; the format changes without notice.

use std::borrow::Cow;

use serde::Deserialize;

use crate::models::{MediaVariant, ResolvedMedia, VideoId};
use crate::normalize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlayerResponse {
    #[serde(default)]
    pub streaming_data: Option<StreamingData>,
    #[serde(default)]
    pub video_details: Option<VideoDetails>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StreamingData {
    /// Combined audio+video renditions.
    #[serde(default)]
    pub formats: Vec<PlayerFormat>,
    /// Separate audio-only and video-only renditions.
    #[serde(default)]
    pub adaptive_formats: Vec<PlayerFormat>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlayerFormat {
    #[serde(default)]
    pub url: Option<String>,
    /// Present instead of `url` on protected renditions; its `url` query
    /// parameter still points at the media.
    #[serde(default)]
    pub signature_cipher: Option<String>,
    #[serde(default)]
    pub quality_label: Option<String>,
    /// Set on audio renditions ("AUDIO_QUALITY_MEDIUM", ...).
    #[serde(default)]
    pub audio_quality: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub fps: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VideoDetails {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    /// The wire carries this as a decimal string, not a number.
    #[serde(default)]
    pub length_seconds: Option<String>,
}

impl PlayerFormat {
    /// Direct media URL, falling back to the `url` parameter of the
    /// signature cipher. Renditions without either are unusable.
    fn direct_url(&self) -> Option<String> {
        if let Some(url) = &self.url {
            return Some(url.clone());
        }
        self.signature_cipher
            .as_deref()
            .and_then(|cipher| form_value(cipher, "url"))
    }

    /// Map this wire format into the normalized variant shape, or `None`
    /// when no usable URL exists.
    pub(crate) fn to_variant(&self) -> Option<MediaVariant> {
        let url = self.direct_url()?;
        let explicit_label = self
            .quality_label
            .as_deref()
            .or(self.audio_quality.is_some().then_some("audio"));
        let mime_type = self
            .mime_type
            .clone()
            .unwrap_or_else(|| "video/mp4".to_string());
        let is_audio_only = normalize::is_audio_only(&mime_type, self.audio_quality.is_some());

        Some(MediaVariant {
            quality: normalize::quality_label(explicit_label, self.height),
            url,
            mime_type,
            width: self.width,
            height: self.height,
            fps: self.fps,
            is_audio_only,
        })
    }
}

impl PlayerResponse {
    /// Build the normalized payload: direct formats first, adaptive formats
    /// after, in wire order.
    pub(crate) fn into_media(
        self,
        video_id: &VideoId,
        page_title: Option<String>,
        source: &'static str,
    ) -> ResolvedMedia {
        let streaming = self.streaming_data.unwrap_or_default();
        let variants: Vec<MediaVariant> = streaming
            .formats
            .iter()
            .chain(streaming.adaptive_formats.iter())
            .filter_map(PlayerFormat::to_variant)
            .collect();

        let details = self.video_details;
        let title = details
            .as_ref()
            .and_then(|d| d.title.clone())
            .or(page_title);
        let author = details.as_ref().and_then(|d| d.author.clone());
        let duration = details
            .as_ref()
            .and_then(|d| d.length_seconds.as_deref())
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|&secs| secs > 0)
            .map(normalize::format_duration);

        ResolvedMedia {
            video_id: video_id.clone(),
            title,
            author,
            duration,
            thumbnail: Some(normalize::default_thumbnail(video_id)),
            variants,
            source: Cow::Borrowed(source),
        }
    }
}

/// Look up `key` in a URL-encoded form string and decode its value.
pub(crate) fn form_value(form: &str, key: &str) -> Option<String> {
    for pair in form.split('&') {
        let mut parts = pair.splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(k), Some(v)) if k == key => {
                let v = v.replace('+', " ");
                return Some(
                    urlencoding::decode(&v)
                        .map(|decoded| decoded.into_owned())
                        .unwrap_or(v),
                );
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_player_response() {
        let json = r#"{
            "videoDetails": {
                "title": "Test Video",
                "author": "Test Channel",
                "lengthSeconds": "212"
            },
            "streamingData": {
                "formats": [
                    {
                        "url": "https://cdn.example/direct.mp4",
                        "qualityLabel": "720p",
                        "mimeType": "video/mp4; codecs=\"avc1.64001F, mp4a.40.2\"",
                        "width": 1280,
                        "height": 720,
                        "fps": 30
                    }
                ],
                "adaptiveFormats": [
                    {
                        "url": "https://cdn.example/audio.m4a",
                        "audioQuality": "AUDIO_QUALITY_MEDIUM",
                        "mimeType": "audio/mp4; codecs=\"mp4a.40.2\""
                    }
                ]
            }
        }"#;

        let player: PlayerResponse = serde_json::from_str(json).unwrap();
        let id = VideoId::new("abc123").unwrap();
        let media = player.into_media(&id, None, "watch_page");

        assert_eq!(media.title.as_deref(), Some("Test Video"));
        assert_eq!(media.author.as_deref(), Some("Test Channel"));
        assert_eq!(media.duration.as_deref(), Some("3:32"));
        assert_eq!(media.variants.len(), 2);

        let direct = &media.variants[0];
        assert_eq!(direct.quality, "720p");
        assert_eq!(direct.width, Some(1280));
        assert!(!direct.is_audio_only);

        let audio = &media.variants[1];
        assert_eq!(audio.quality, "audio");
        assert!(audio.is_audio_only);
        assert_eq!(audio.height, None);
    }

    #[test]
    fn test_cipher_url_fallback() {
        let format = PlayerFormat {
            signature_cipher: Some(
                "s=abcdef&sp=sig&url=https%3A%2F%2Fcdn.example%2Fv%2F1.mp4%3Fexpire%3D99"
                    .to_string(),
            ),
            quality_label: Some("360p".to_string()),
            ..Default::default()
        };

        let variant = format.to_variant().unwrap();
        assert_eq!(variant.url, "https://cdn.example/v/1.mp4?expire=99");
        assert_eq!(variant.quality, "360p");
        // No mime type on the wire; the default applies.
        assert_eq!(variant.mime_type, "video/mp4");
    }

    #[test]
    fn test_format_without_url_is_dropped() {
        let format = PlayerFormat {
            quality_label: Some("1080p".to_string()),
            ..Default::default()
        };
        assert!(format.to_variant().is_none());

        // A cipher without a url parameter is equally unusable.
        let format = PlayerFormat {
            signature_cipher: Some("s=abcdef&sp=sig".to_string()),
            ..Default::default()
        };
        assert!(format.to_variant().is_none());
    }

    #[test]
    fn test_height_derived_quality() {
        let format = PlayerFormat {
            url: Some("https://cdn.example/v.mp4".to_string()),
            height: Some(480),
            ..Default::default()
        };
        assert_eq!(format.to_variant().unwrap().quality, "480p");
    }

    #[test]
    fn test_missing_sections_yield_empty_media() {
        let player: PlayerResponse = serde_json::from_str("{}").unwrap();
        let id = VideoId::new("abc123").unwrap();
        let media = player.into_media(&id, Some("Page Title".to_string()), "watch_page");

        assert!(!media.has_variants());
        assert_eq!(media.title.as_deref(), Some("Page Title"));
        assert_eq!(media.author, None);
        assert_eq!(media.duration, None);
    }

    #[test]
    fn test_form_value_decodes_plus_and_percent() {
        assert_eq!(
            form_value("a=1&title=Never+Gonna+Give%21&b=2", "title").as_deref(),
            Some("Never Gonna Give!")
        );
        assert_eq!(form_value("a=1&b=2", "missing"), None);
    }
}
