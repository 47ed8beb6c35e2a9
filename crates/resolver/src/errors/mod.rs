//! Error types and decline classification for the resolver crate.
//!
//! This module provides:
//! - [`ProviderError`]: The error enum for provider invocations
//! - [`DeclineReason`]: Classification recorded by the chain when a provider declines

mod decline;

pub use decline::DeclineReason;

use thiserror::Error;

/// Errors a provider invocation can produce.
///
/// Providers are inherently unreliable external systems, so none of these
/// variants is terminal for a resolution: the chain classifies each via
/// [`decline_reason`](Self::decline_reason), records it, and advances to the
/// next provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The outbound request failed at the transport level.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("Upstream status {status} from {provider}")]
    UpstreamStatus {
        /// The provider that returned the status
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// The provider answered but the payload did not match any shape the
    /// provider knows how to extract. Upstream formats are versionless and
    /// change without notice, so this is an expected failure mode.
    #[error("Malformed payload from {provider}: {message}")]
    Malformed {
        /// The provider whose payload failed to parse
        provider: String,
        /// What failed to parse
        message: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },
}

impl ProviderError {
    /// Returns the decline classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use medialink_resolver::errors::{DeclineReason, ProviderError};
    ///
    /// let error = ProviderError::Timeout { provider: "watch_page".to_string() };
    /// assert_eq!(error.decline_reason(), DeclineReason::TimedOut);
    /// ```
    pub fn decline_reason(&self) -> DeclineReason {
        match self {
            Self::Network(_) | Self::UpstreamStatus { .. } => DeclineReason::Network,
            Self::RateLimited { .. } => DeclineReason::RateLimited,
            Self::Malformed { .. } => DeclineReason::Malformed,
            Self::Timeout { .. } => DeclineReason::TimedOut,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_classification() {
        let error = ProviderError::RateLimited {
            provider: "oembed".to_string(),
        };
        assert_eq!(error.decline_reason(), DeclineReason::RateLimited);
    }

    #[test]
    fn test_upstream_status_classification() {
        let error = ProviderError::UpstreamStatus {
            provider: "watch_page".to_string(),
            status: 503,
        };
        assert_eq!(error.decline_reason(), DeclineReason::Network);
    }

    #[test]
    fn test_malformed_classification() {
        let error = ProviderError::Malformed {
            provider: "mirror".to_string(),
            message: "player response not found".to_string(),
        };
        assert_eq!(error.decline_reason(), DeclineReason::Malformed);
    }

    #[test]
    fn test_timeout_classification() {
        let error = ProviderError::Timeout {
            provider: "embed".to_string(),
        };
        assert_eq!(error.decline_reason(), DeclineReason::TimedOut);
    }

    #[test]
    fn test_error_display() {
        let error = ProviderError::RateLimited {
            provider: "oembed".to_string(),
        };
        assert_eq!(format!("{}", error), "Rate limited: oembed");

        let error = ProviderError::UpstreamStatus {
            provider: "watch_page".to_string(),
            status: 404,
        };
        assert_eq!(format!("{}", error), "Upstream status 404 from watch_page");

        let error = ProviderError::Malformed {
            provider: "embed".to_string(),
            message: "setConfig block missing".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Malformed payload from embed: setConfig block missing"
        );
    }
}
