//! Attempt tracking for resolution diagnostics.

use crate::errors::DeclineReason;
use crate::models::ProviderId;

/// Record of a single provider attempt during a resolution.
#[derive(Clone, Debug)]
pub struct AttemptRecord {
    pub provider_id: ProviderId,
    pub declined: Option<DeclineReason>,
    pub detail: Option<String>,
    pub succeeded: bool,
}

/// Detailed result of a resolution with per-provider diagnostics.
#[derive(Clone, Debug, Default)]
pub struct ResolutionReport {
    pub attempts: Vec<AttemptRecord>,
}

impl ResolutionReport {
    pub fn new() -> Self {
        Self {
            attempts: Vec::new(),
        }
    }

    pub fn record_decline(
        &mut self,
        provider_id: ProviderId,
        reason: DeclineReason,
        detail: Option<String>,
    ) {
        self.attempts.push(AttemptRecord {
            provider_id,
            declined: Some(reason),
            detail,
            succeeded: false,
        });
    }

    pub fn record_success(&mut self, provider_id: ProviderId) {
        self.attempts.push(AttemptRecord {
            provider_id,
            declined: None,
            detail: None,
            succeeded: true,
        });
    }

    /// Summary for logging/debugging.
    pub fn summary(&self) -> String {
        self.attempts
            .iter()
            .map(|a| {
                if a.succeeded {
                    format!("{}: SUCCESS", a.provider_id)
                } else if let Some(reason) = &a.declined {
                    match &a.detail {
                        Some(detail) => {
                            format!("{}: DECLINED ({:?}: {})", a.provider_id, reason, detail)
                        }
                        None => format!("{}: DECLINED ({:?})", a.provider_id, reason),
                    }
                } else {
                    format!("{}: UNKNOWN", a.provider_id)
                }
            })
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// Check if any provider succeeded.
    pub fn has_success(&self) -> bool {
        self.attempts.iter().any(|a| a.succeeded)
    }

    /// Get all declines.
    pub fn declines(&self) -> Vec<(&ProviderId, DeclineReason)> {
        self.attempts
            .iter()
            .filter_map(|a| a.declined.map(|d| (&a.provider_id, d)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;

    #[test]
    fn test_report_summary() {
        let mut report = ResolutionReport::new();
        report.record_decline(
            Cow::Borrowed("watch_page"),
            DeclineReason::Malformed,
            Some("player response not found".to_string()),
        );
        report.record_decline(Cow::Borrowed("embed"), DeclineReason::TimedOut, None);
        report.record_success(Cow::Borrowed("mirror"));

        let summary = report.summary();
        assert!(summary.contains("watch_page: DECLINED (Malformed: player response not found)"));
        assert!(summary.contains("embed: DECLINED (TimedOut)"));
        assert!(summary.contains("mirror: SUCCESS"));
    }

    #[test]
    fn test_has_success() {
        let mut report = ResolutionReport::new();
        report.record_decline(Cow::Borrowed("watch_page"), DeclineReason::Network, None);
        assert!(!report.has_success());

        report.record_success(Cow::Borrowed("embed"));
        assert!(report.has_success());
    }

    #[test]
    fn test_declines() {
        let mut report = ResolutionReport::new();
        report.record_decline(Cow::Borrowed("watch_page"), DeclineReason::Empty, None);
        report.record_decline(Cow::Borrowed("embed"), DeclineReason::DeadlineExceeded, None);
        report.record_success(Cow::Borrowed("mirror"));

        let declines = report.declines();
        assert_eq!(declines.len(), 2);
        assert_eq!(declines[0].1, DeclineReason::Empty);
    }
}
