use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use medialink_resolver::{default_providers, ProviderChain};

use crate::config::Config;

pub struct AppState {
    pub chain: Arc<ProviderChain>,
}

pub fn init_tracing() {
    let log_format = std::env::var("MEDIALINK_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let providers = default_providers(config.mirror_instances.clone());
    let chain = ProviderChain::new(providers, config.fallback_links.clone())
        .with_timeouts(config.provider_timeout, config.total_deadline);

    tracing::info!(
        "Provider chain ready with {} providers",
        chain.providers().len()
    );

    Arc::new(AppState {
        chain: Arc::new(chain),
    })
}
