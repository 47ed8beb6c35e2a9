//! Provider chain for orchestrating media resolution.
//!
//! The chain walks its providers strictly in registration order, handling:
//! - First-success-wins fallback to the next provider on decline
//! - Per-provider timeouts and a total deadline for the whole walk
//! - Diagnostic tracking for debugging provider declines
//!
//! A provider failure is never terminal: it only disqualifies that provider
//! for the current call. When every provider declines, the chain returns a
//! fallback payload with alternative-access links instead of an error.

use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use tokio::time::timeout;

use super::ResolutionReport;
use crate::errors::DeclineReason;
use crate::models::{FallbackPayload, ProviderId, Resolution, VideoId};
use crate::provider::MediaProvider;

/// Time budget for a single provider attempt.
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Time budget for a whole chain walk.
pub const DEFAULT_TOTAL_DEADLINE: Duration = Duration::from_secs(30);

/// Ordered provider chain.
pub struct ProviderChain {
    providers: Vec<Arc<dyn MediaProvider>>,
    provider_timeout: Duration,
    total_deadline: Duration,
    /// Alternative-access link templates; `{id}` expands to the video id.
    fallback_templates: Vec<String>,
}

impl ProviderChain {
    /// Create a chain with default timeouts.
    ///
    /// # Arguments
    ///
    /// * `providers` - Providers in resolution order
    /// * `fallback_templates` - Link templates rendered when every provider
    ///   declines; `{id}` is replaced with the video id
    pub fn new(providers: Vec<Arc<dyn MediaProvider>>, fallback_templates: Vec<String>) -> Self {
        Self {
            providers,
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
            total_deadline: DEFAULT_TOTAL_DEADLINE,
            fallback_templates,
        }
    }

    /// Override the per-provider timeout and the total deadline.
    pub fn with_timeouts(mut self, provider_timeout: Duration, total_deadline: Duration) -> Self {
        self.provider_timeout = provider_timeout;
        self.total_deadline = total_deadline;
        self
    }

    /// Get the list of registered providers.
    pub fn providers(&self) -> &[Arc<dyn MediaProvider>] {
        &self.providers
    }

    /// Resolve a video id to playable media.
    ///
    /// Tries providers in order:
    /// 1. Check the remaining total deadline
    /// 2. Invoke the provider under `min(provider_timeout, remaining)`
    /// 3. A result with variants wins and ends the walk
    /// 4. On decline (error, timeout, or empty result), try the next provider
    pub async fn resolve(&self, video_id: &VideoId) -> Resolution {
        let mut report = ResolutionReport::new();
        let resolution = self.resolve_with_report(video_id, &mut report).await;

        match &resolution {
            Resolution::Resolved(media) => {
                debug!(
                    "Resolved '{}' via provider '{}'. Attempts: {}",
                    video_id,
                    media.source,
                    report.summary()
                );
            }
            Resolution::Exhausted(_) => {
                warn!(
                    "All providers declined for '{}'. Attempts: {}",
                    video_id,
                    report.summary()
                );
            }
        }

        resolution
    }

    /// Resolve a video id, recording every attempt into `report`.
    ///
    /// Useful for debugging which providers declined and why.
    pub async fn resolve_with_report(
        &self,
        video_id: &VideoId,
        report: &mut ResolutionReport,
    ) -> Resolution {
        let started = tokio::time::Instant::now();

        for provider in &self.providers {
            let provider_id: ProviderId = Cow::Borrowed(provider.id());

            let remaining = self.total_deadline.saturating_sub(started.elapsed());
            if remaining.is_zero() {
                debug!(
                    "Total deadline spent before provider '{}' for '{}'",
                    provider_id, video_id
                );
                report.record_decline(provider_id, DeclineReason::DeadlineExceeded, None);
                continue;
            }

            let budget = self.provider_timeout.min(remaining);

            match timeout(budget, provider.resolve(video_id)).await {
                Ok(Ok(media)) => {
                    if media.has_variants() {
                        report.record_success(provider_id);
                        return Resolution::Resolved(media);
                    }

                    debug!(
                        "Provider '{}' returned no variants for '{}', trying next",
                        provider_id, video_id
                    );
                    report.record_decline(provider_id, DeclineReason::Empty, None);
                }
                Ok(Err(e)) => {
                    debug!("Provider '{}' declined '{}': {}", provider_id, video_id, e);
                    report.record_decline(provider_id, e.decline_reason(), Some(e.to_string()));
                }
                Err(_) => {
                    debug!(
                        "Provider '{}' exceeded its {:?} budget for '{}'",
                        provider_id, budget, video_id
                    );
                    report.record_decline(provider_id, DeclineReason::TimedOut, None);
                }
            }
        }

        Resolution::Exhausted(self.fallback(video_id))
    }

    /// Render the fallback payload for a video id.
    fn fallback(&self, video_id: &VideoId) -> FallbackPayload {
        FallbackPayload {
            video_id: video_id.clone(),
            alternatives: self
                .fallback_templates
                .iter()
                .map(|template| template.replace("{id}", video_id.as_str()))
                .collect(),
        }
    }
}
