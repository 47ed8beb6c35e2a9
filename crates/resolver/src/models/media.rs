use serde::{Deserialize, Serialize};

/// A single playable rendition of a video.
///
/// Optional fields are filled with `None` (serialized as explicit `null`)
/// when the provider does not report them, so the key set is fixed across
/// providers.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MediaVariant {
    /// Human-readable quality label ("720p", "audio", "unknown", ...).
    pub quality: String,
    /// Direct media URL.
    pub url: String,
    /// Mime type as reported by the provider ("video/mp4; codecs=...").
    pub mime_type: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fps: Option<u32>,
    /// True when the rendition carries audio only.
    pub is_audio_only: bool,
}
