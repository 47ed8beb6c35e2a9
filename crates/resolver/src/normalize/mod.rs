//! Shared normalization rules.
//!
//! Every provider maps its raw payload into [`ResolvedMedia`] through these
//! functions, so label derivation, audio detection, and metadata cleanup
//! behave identically regardless of which provider produced the data.
//!
//! [`ResolvedMedia`]: crate::models::ResolvedMedia

use crate::models::VideoId;

/// Derive a quality label from the hints a provider supplied.
///
/// Precedence: explicit label from the provider, then a height-derived
/// `"{height}p"` label, then `"unknown"`.
pub fn quality_label(explicit: Option<&str>, height: Option<u32>) -> String {
    if let Some(label) = explicit {
        let label = label.trim();
        if !label.is_empty() {
            return label.to_string();
        }
    }
    if let Some(height) = height {
        return format!("{height}p");
    }
    "unknown".to_string()
}

/// A variant is audio-only when its mime type carries the audio marker or
/// the provider explicitly flagged it. Once flagged, a weaker signal never
/// clears it.
pub fn is_audio_only(mime_type: &str, explicit: bool) -> bool {
    explicit || mime_type.contains("audio")
}

/// Strip the platform suffix a page `<title>` carries and trim whitespace.
pub fn clean_title(raw: &str) -> String {
    let title = raw.trim();
    let title = title.strip_suffix(" - YouTube").unwrap_or(title);
    title.trim().to_string()
}

/// Format a duration in seconds as `m:ss`.
pub fn format_duration(total_seconds: u64) -> String {
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{mins}:{secs:02}")
}

/// Thumbnail URL derived from the identifier, used when a provider supplies
/// no thumbnail of its own.
pub fn default_thumbnail(video_id: &VideoId) -> String {
    format!("https://i.ytimg.com/vi/{video_id}/maxresdefault.jpg")
}
