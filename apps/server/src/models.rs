use medialink_resolver::{FallbackPayload, MediaVariant, ResolvedMedia};
use serde::{Deserialize, Serialize};

/// Message attached to the fallback (`status: info`) payload.
const FALLBACK_MESSAGE: &str =
    "Direct resolution failed. Use the alternative links to access the video.";

/// Response envelope for the resolve endpoint, tagged by `status`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResolveResponse {
    Success(ResolvedMediaDto),
    Info(FallbackDto),
    Error { message: String, example: String },
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedMediaDto {
    pub video_id: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub duration: Option<String>,
    pub thumbnail: Option<String>,
    pub media_variants: Vec<MediaVariantDto>,
    pub source: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MediaVariantDto {
    pub quality: String,
    pub url: String,
    pub mime_type: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fps: Option<u32>,
    pub is_audio_only: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FallbackDto {
    pub video_id: String,
    pub message: String,
    pub alternatives: Vec<String>,
}

impl From<ResolvedMedia> for ResolvedMediaDto {
    fn from(media: ResolvedMedia) -> Self {
        Self {
            video_id: media.video_id.to_string(),
            title: media.title,
            author: media.author,
            duration: media.duration,
            thumbnail: media.thumbnail,
            media_variants: media
                .variants
                .into_iter()
                .map(MediaVariantDto::from)
                .collect(),
            source: media.source.into_owned(),
        }
    }
}

impl From<MediaVariant> for MediaVariantDto {
    fn from(variant: MediaVariant) -> Self {
        Self {
            quality: variant.quality,
            url: variant.url,
            mime_type: variant.mime_type,
            width: variant.width,
            height: variant.height,
            fps: variant.fps,
            is_audio_only: variant.is_audio_only,
        }
    }
}

impl From<FallbackPayload> for FallbackDto {
    fn from(payload: FallbackPayload) -> Self {
        Self {
            video_id: payload.video_id.to_string(),
            message: FALLBACK_MESSAGE.to_string(),
            alternatives: payload.alternatives,
        }
    }
}
