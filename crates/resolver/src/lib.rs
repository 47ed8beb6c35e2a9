//! Medialink Resolver Crate
//!
//! This crate provides provider-agnostic resolution of video URLs into
//! direct streaming links for the Medialink service.
//!
//! # Overview
//!
//! The resolver crate supports:
//! - Canonical video-id extraction from the common URL shapes
//! - Multiple providers: watch page, embed page, oEmbed, mirror instances
//! - Ordered, first-success-wins fallback across providers
//! - Per-provider timeouts and a total deadline per resolution
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |    Video URL     | --> |     VideoId      |  (canonical identity)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  ProviderChain   |  (ordered fallback walk)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |     Provider     |  (watch page, embed, ...)
//!                          +------------------+
//!                                  |
//!                                  v
//!                  +----------------+----------------+
//!                  |  ResolvedMedia                  |  (success)
//!                  |  FallbackPayload                |  (all declined)
//!                  +---------------------------------+
//! ```
//!
//! # Core Types
//!
//! - [`VideoId`] - Canonical video identifier extracted from a URL
//! - [`ResolvedMedia`] - Normalized success payload shared by all providers
//! - [`MediaVariant`] - A single playable rendition
//! - [`FallbackPayload`] - Alternative-access links when every provider declines
//! - [`Resolution`] - The outcome of one chain walk
//!
//! # Type Aliases
//!
//! - [`ProviderId`] - Provider identifier (e.g., "watch_page", "mirror")

pub mod chain;
pub mod errors;
pub mod extract;
pub mod models;
pub mod normalize;
pub mod provider;

// Re-export all public types from models
pub use models::{FallbackPayload, MediaVariant, ProviderId, Resolution, ResolvedMedia, VideoId};

// Re-export extraction entry point
pub use extract::extract_video_id;

// Re-export provider types
pub use provider::embed::EmbedProvider;
pub use provider::mirror::MirrorProvider;
pub use provider::oembed::OembedProvider;
pub use provider::watch_page::WatchPageProvider;
pub use provider::{default_providers, MediaProvider, DEFAULT_MIRROR_INSTANCES};

// Re-export chain types
pub use chain::{
    AttemptRecord, ProviderChain, ResolutionReport, DEFAULT_PROVIDER_TIMEOUT,
    DEFAULT_TOTAL_DEADLINE,
};

// Re-export error types
pub use errors::{DeclineReason, ProviderError};
