use serde::Serialize;

use super::media::MediaVariant;
use super::types::ProviderId;
use super::video::VideoId;

/// Normalized success payload shared by every provider.
///
/// Providers return heterogeneous raw shapes; this is the one schema they
/// all map into. Optional fields stay in the struct as `None` rather than
/// being dropped, so serialized output always carries the full key set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedMedia {
    pub video_id: VideoId,
    pub title: Option<String>,
    pub author: Option<String>,
    /// Formatted as `m:ss` when known.
    pub duration: Option<String>,
    pub thumbnail: Option<String>,
    /// Renditions in the order the provider reported them.
    pub variants: Vec<MediaVariant>,
    /// Id of the provider that produced this payload.
    pub source: ProviderId,
}

impl ResolvedMedia {
    /// A result with no variants is well-formed but not usable; the chain
    /// treats it as a decline.
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }
}

/// Terminal non-error payload returned when every provider declined.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FallbackPayload {
    pub video_id: VideoId,
    /// Alternative-access links, rendered from operator-configured templates.
    pub alternatives: Vec<String>,
}

/// Outcome of one resolution call: exactly one of success or fallback.
///
/// Provider failures never surface here; they only disqualify the failing
/// provider for the call.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    Resolved(ResolvedMedia),
    Exhausted(FallbackPayload),
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}
