//! Server configuration loaded from the environment.

use std::time::Duration;

use medialink_resolver::DEFAULT_MIRROR_INSTANCES;

/// Alternative-access link templates offered when every provider declines.
/// `{id}` expands to the video id.
pub const DEFAULT_FALLBACK_LINKS: [&str; 3] = [
    "https://yewtu.be/watch?v={id}",
    "https://inv.nadeko.net/watch?v={id}",
    "https://www.y2mate.com/youtube/{id}",
];

pub struct Config {
    /// Address the HTTP server binds to.
    pub listen_addr: String,
    /// Time budget for a single provider attempt.
    pub provider_timeout: Duration,
    /// Time budget for a whole resolution.
    pub total_deadline: Duration,
    /// Mirror instances, in the order they are tried.
    pub mirror_instances: Vec<String>,
    /// Fallback link templates, `{id}` expands to the video id.
    pub fallback_links: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let listen_addr = env_string("MEDIALINK_LISTEN_ADDR", "0.0.0.0:3000");
        let provider_timeout =
            Duration::from_millis(env_u64("MEDIALINK_PROVIDER_TIMEOUT_MS", 10_000));
        let total_deadline = Duration::from_millis(env_u64("MEDIALINK_TOTAL_DEADLINE_MS", 30_000));

        let mirror_instances = env_list("MEDIALINK_MIRROR_INSTANCES").unwrap_or_else(|| {
            DEFAULT_MIRROR_INSTANCES
                .iter()
                .map(|s| s.to_string())
                .collect()
        });
        let fallback_links = env_list("MEDIALINK_FALLBACK_LINKS").unwrap_or_else(|| {
            DEFAULT_FALLBACK_LINKS
                .iter()
                .map(|s| s.to_string())
                .collect()
        });

        Self {
            listen_addr,
            provider_timeout,
            total_deadline,
            mirror_instances,
            fallback_links,
        }
    }
}

fn env_string(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Comma-separated list variable; `None` when unset or empty.
fn env_list(name: &str) -> Option<Vec<String>> {
    let raw = std::env::var(name).ok()?;
    let values = split_list(&raw);
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}
