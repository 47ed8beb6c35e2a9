//! Video identifier extraction from free-form input.
//!
//! Supported URL forms, in match priority order:
//!
//! 1. Watch form - `…/watch?v=ID` (any host)
//! 2. Short-link form - `youtu.be/ID`
//! 3. Embed form - `…/embed/ID`
//! 4. Generic path form - `…/v/ID`
//!
//! The first pattern that matches wins; conflicting later matches are never
//! consulted.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::VideoId;

lazy_static! {
    static ref URL_PATTERNS: [Regex; 4] = [
        Regex::new(r"/watch\?(?:[^#\s]*&)?v=([A-Za-z0-9_-]+)").unwrap(),
        Regex::new(r"youtu\.be/([A-Za-z0-9_-]+)").unwrap(),
        Regex::new(r"/embed/([A-Za-z0-9_-]+)").unwrap(),
        Regex::new(r"/v/([A-Za-z0-9_-]+)").unwrap(),
    ];
}

/// Extract the canonical video identifier from user-supplied input.
///
/// Returns `None` when no supported form matches or the input is empty;
/// callers must treat that as a client input error, not a system failure.
pub fn extract_video_id(input: &str) -> Option<VideoId> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    for pattern in URL_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(input) {
            return captures.get(1).and_then(|m| VideoId::new(m.as_str()));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extracted(input: &str) -> Option<String> {
        extract_video_id(input).map(|id| id.as_str().to_string())
    }

    #[test]
    fn test_watch_form() {
        assert_eq!(
            extracted("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        // Host is irrelevant; the path and query shape identify the form.
        assert_eq!(
            extracted("https://example.com/watch?v=abc123"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_watch_form_with_leading_parameters() {
        assert_eq!(
            extracted("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_watch_form_ignores_trailing_parameters() {
        assert_eq!(
            extracted("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_short_link_form() {
        assert_eq!(
            extracted("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extracted("https://youtu.be/dQw4w9WgXcQ?t=30"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_embed_form() {
        assert_eq!(
            extracted("https://www.youtube.com/embed/M7lc1UVf-VE"),
            Some("M7lc1UVf-VE".to_string())
        );
    }

    #[test]
    fn test_generic_path_form() {
        assert_eq!(
            extracted("https://www.youtube.com/v/M7lc1UVf-VE"),
            Some("M7lc1UVf-VE".to_string())
        );
    }

    #[test]
    fn test_first_matching_pattern_wins() {
        // Both the watch and short-link forms appear; the watch form is
        // evaluated first.
        assert_eq!(
            extracted("https://example.com/watch?v=first111 https://youtu.be/second22"),
            Some("first111".to_string())
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extracted(""), None);
        assert_eq!(extracted("   "), None);
    }

    #[test]
    fn test_non_matching_input() {
        assert_eq!(extracted("not a url"), None);
        assert_eq!(extracted("https://example.com/"), None);
        assert_eq!(extracted("https://example.com/watch?list=PL123"), None);
        // An empty capture position never matches.
        assert_eq!(extracted("https://example.com/watch?v="), None);
    }
}
