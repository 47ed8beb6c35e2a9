//! Media provider trait definition.

use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::models::{ResolvedMedia, VideoId};

/// Trait for media resolution providers.
///
/// Implement this trait to add a new scraping strategy. The chain invokes
/// providers in its configured order and never inspects how a provider
/// obtained its data; a provider only has to map whatever it scraped into
/// the normalized [`ResolvedMedia`] shape.
///
/// Implementations must be resilient to partial or missing upstream fields
/// and must surface every failure as a [`ProviderError`] rather than
/// panicking; the chain absorbs all of them.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use medialink_resolver::provider::MediaProvider;
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl MediaProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "my_provider"
///     }
///
///     async fn resolve(&self, video_id: &VideoId) -> Result<ResolvedMedia, ProviderError> {
///         // fetch, parse, normalize
///     }
/// }
/// ```
#[async_trait]
pub trait MediaProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Used for logging, attempt reporting, and the `source` field of the
    /// payload it produces.
    fn id(&self) -> &'static str;

    /// Attempt to resolve playable media for the given video id.
    ///
    /// A well-formed result with no variants is a legitimate return value;
    /// the chain classifies it as an empty decline.
    async fn resolve(&self, video_id: &VideoId) -> Result<ResolvedMedia, ProviderError>;
}
