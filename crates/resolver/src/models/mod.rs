//! Core data types for media resolution:
//! - `types` - Type aliases for common identifiers (ProviderId)
//! - `video` - Canonical video identity (VideoId)
//! - `media` - Playable rendition data (MediaVariant)
//! - `resolution` - Resolution payloads (ResolvedMedia, FallbackPayload, Resolution)

mod media;
mod resolution;
mod types;
mod video;

pub use media::MediaVariant;
pub use resolution::{FallbackPayload, Resolution, ResolvedMedia};
pub use types::ProviderId;
pub use video::VideoId;
