use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Canonical video identifier extracted from user input.
///
/// Immutable once constructed. The constructor enforces the syntactic
/// constraint shared by every supported URL form: non-empty, URL-safe
/// identifier characters only (`A-Z a-z 0-9 _ -`).
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(Arc<str>);

impl VideoId {
    /// Validate and wrap a raw identifier string.
    ///
    /// Returns `None` for empty input or input containing characters outside
    /// the identifier alphabet.
    pub fn new(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return None;
        }
        Some(Self(Arc::from(raw)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
