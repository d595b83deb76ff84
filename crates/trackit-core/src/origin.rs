//! Origin normalization
//!
//! Maps a raw URL to the normalized site identity a session is keyed on.
//! Only fetchable web schemes (http/https) are trackable; internal pages,
//! file URLs and malformed input are excluded rather than reported as
//! errors.

use serde::{Deserialize, Serialize};
use url::Url;

/// Normalized site identity. Opaque and comparable; either a registrable
/// host name or a display label assigned by an external classifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Origin(String);

impl Origin {
    /// Wrap an already-normalized or classified identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Origin(id.into())
    }

    /// Derive the origin from a raw URL, or `None` if the URL is not
    /// trackable. The host is lowercased and a leading `www.` is dropped.
    pub fn from_url(url: &str) -> Option<Origin> {
        let parsed = Url::parse(url).ok()?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return None;
        }
        let host = parsed.host_str()?;
        let host = host.strip_prefix("www.").unwrap_or(host);
        if host.is_empty() {
            return None;
        }
        Some(Origin(host.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
