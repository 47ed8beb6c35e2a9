//! Provider chain module.
//!
//! This module provides orchestration for media providers, including:
//! - Ordered, first-success-wins resolution
//! - Per-provider timeouts and a total walk deadline
//! - Attempt tracking for decline diagnostics

mod report;
mod resolver;

pub use report::{AttemptRecord, ResolutionReport};
pub use resolver::{ProviderChain, DEFAULT_PROVIDER_TIMEOUT, DEFAULT_TOTAL_DEADLINE};
