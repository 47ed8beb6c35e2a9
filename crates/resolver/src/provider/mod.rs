//! Media provider abstractions and implementations.
//!
//! This module contains:
//! - The `MediaProvider` trait that all providers implement
//! - Concrete provider implementations (watch page, embed, oEmbed, mirror)
//!
//! # Architecture
//!
//! The provider system is designed to be:
//! - **Provider-agnostic**: The chain doesn't know about specific providers
//! - **Extensible**: New providers can be added by implementing `MediaProvider`
//! - **Order-preserving**: Providers are tried strictly in the order given
//!
//! Providers receive a pre-extracted [`VideoId`](crate::models::VideoId);
//! canonical-id extraction from a raw URL happens in the extract module,
//! never in the providers themselves.

mod traits;

pub(crate) mod player;

// Provider implementations
pub mod embed;
pub mod mirror;
pub mod oembed;
pub mod watch_page;

// Re-exports
pub use mirror::DEFAULT_MIRROR_INSTANCES;
pub use traits::MediaProvider;

use std::sync::Arc;

/// Browser User-Agent sent on every upstream request. Some upstream pages
/// serve a stripped-down markup without it.
pub(crate) const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Build the default provider chain members, in resolution order.
pub fn default_providers(mirror_instances: Vec<String>) -> Vec<Arc<dyn MediaProvider>> {
    vec![
        Arc::new(watch_page::WatchPageProvider::new()),
        Arc::new(embed::EmbedProvider::new()),
        Arc::new(oembed::OembedProvider::new()),
        Arc::new(mirror::MirrorProvider::new(mirror_instances)),
    ]
}
