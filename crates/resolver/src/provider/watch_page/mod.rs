//! Watch-page provider implementation.
//!
//! Fetches the platform watch page as HTML and extracts the embedded
//! player-response JSON, which carries direct streaming URLs.
//!
//! # Endpoint
//!
//! - Watch page: `https://www.youtube.com/watch?v={id}`
//!
//! # Extraction
//!
//! The player response is located via three alternative inline-script
//! patterns (the platform rotates between them); the page `<title>` backs up
//! a missing `videoDetails.title`. Renditions with neither a direct `url`
//! nor a cipher-carried one are dropped.

use std::time::Duration;

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::{header, Client};

use crate::errors::ProviderError;
use crate::models::{ResolvedMedia, VideoId};
use crate::normalize;
use crate::provider::player::PlayerResponse;
use crate::provider::{MediaProvider, USER_AGENT};

const BASE_URL: &str = "https://www.youtube.com";
const PROVIDER_ID: &str = "watch_page";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

lazy_static! {
    static ref PLAYER_RESPONSE_PATTERNS: [Regex; 3] = [
        Regex::new(r"ytInitialPlayerResponse\s*=\s*(\{.+?\});\s*var").unwrap(),
        Regex::new(r"var ytInitialPlayerResponse = (\{.+?\});</script>").unwrap(),
        Regex::new(r#"window\["ytInitialPlayerResponse"\] = (\{.+?\});</script>"#).unwrap(),
    ];
    static ref TITLE_PATTERN: Regex = Regex::new(r"<title>([^<]*)</title>").unwrap();
}

/// Provider that scrapes streaming data out of the watch page itself.
pub struct WatchPageProvider {
    client: Client,
}

impl WatchPageProvider {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Fetch a page as text, mapping upstream failures to provider errors.
    async fn fetch_html(&self, url: &str) -> Result<String, ProviderError> {
        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(
                header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            )
            .header(header::ACCEPT_LANGUAGE, "en-US,en;q=0.5")
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !response.status().is_success() {
            return Err(ProviderError::UpstreamStatus {
                provider: PROVIDER_ID.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    /// Locate and parse the player response inside the page HTML.
    ///
    /// Patterns are tried in order; the first captured block that parses as
    /// JSON wins. A page where a block matched but nothing parsed is
    /// malformed, as is a page with no block at all.
    fn find_player_response(html: &str) -> Result<PlayerResponse, ProviderError> {
        let mut matched = false;
        for pattern in PLAYER_RESPONSE_PATTERNS.iter() {
            if let Some(block) = pattern.captures(html).and_then(|captures| captures.get(1)) {
                matched = true;
                match serde_json::from_str::<PlayerResponse>(block.as_str()) {
                    Ok(player) => return Ok(player),
                    Err(e) => {
                        log::debug!("player response block did not parse: {e}");
                    }
                }
            }
        }

        let message = if matched {
            "player response block did not parse as JSON"
        } else {
            "player response not found in page"
        };
        Err(ProviderError::Malformed {
            provider: PROVIDER_ID.to_string(),
            message: message.to_string(),
        })
    }

    fn page_title(html: &str) -> Option<String> {
        TITLE_PATTERN
            .captures(html)
            .and_then(|captures| captures.get(1))
            .map(|m| normalize::clean_title(m.as_str()))
            .filter(|title| !title.is_empty())
    }
}

impl Default for WatchPageProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaProvider for WatchPageProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn resolve(&self, video_id: &VideoId) -> Result<ResolvedMedia, ProviderError> {
        let url = format!("{BASE_URL}/watch?v={video_id}");
        let html = self.fetch_html(&url).await?;

        let page_title = Self::page_title(&html);
        let player = Self::find_player_response(&html)?;
        Ok(player.into_media(video_id, page_title, PROVIDER_ID))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_player(script: &str) -> String {
        format!(
            "<html><head><title>Test Video - YouTube</title></head>\
             <body><script>{script}</script></body></html>"
        )
    }

    #[test]
    fn test_primary_player_pattern() {
        let html = page_with_player(
            r#"ytInitialPlayerResponse = {"videoDetails":{"title":"Inline"}};var meta = {};"#,
        );
        let player = WatchPageProvider::find_player_response(&html).unwrap();
        assert_eq!(
            player.video_details.and_then(|d| d.title).as_deref(),
            Some("Inline")
        );
    }

    #[test]
    fn test_alternative_player_patterns() {
        let html =
            r#"<script>var ytInitialPlayerResponse = {"videoDetails":{"title":"Alt"}};</script>"#;
        assert!(WatchPageProvider::find_player_response(html).is_ok());

        let html = r#"<script>window["ytInitialPlayerResponse"] = {"videoDetails":{"title":"Win"}};</script>"#;
        assert!(WatchPageProvider::find_player_response(html).is_ok());
    }

    #[test]
    fn test_missing_player_is_malformed() {
        let err = WatchPageProvider::find_player_response("<html></html>").unwrap_err();
        match err {
            ProviderError::Malformed { provider, message } => {
                assert_eq!(provider, PROVIDER_ID);
                assert!(message.contains("not found"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_player_is_malformed() {
        let html = page_with_player("ytInitialPlayerResponse = {broken};var x = 1;");
        let err = WatchPageProvider::find_player_response(&html).unwrap_err();
        assert!(matches!(err, ProviderError::Malformed { .. }));
    }

    #[test]
    fn test_page_title_cleanup() {
        let html = page_with_player("ytInitialPlayerResponse = {};var x = 1;");
        assert_eq!(
            WatchPageProvider::page_title(&html).as_deref(),
            Some("Test Video")
        );
        assert_eq!(WatchPageProvider::page_title("<title></title>"), None);
        assert_eq!(WatchPageProvider::page_title("no title here"), None);
    }
}
