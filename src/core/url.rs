//! Site-local path type for type-safe hint targets.
//!
//! - Internal representation: always decoded (human-readable)
//! - Browser boundary: decode on input, encode on output
//!
//! Canonical route form: leading `/`, query and fragment stripped, no
//! trailing slash except the root itself. Asset paths keep their exact
//! shape apart from the leading slash.

use std::borrow::Borrow;
use std::sync::Arc;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Characters that must be percent-encoded when a path re-enters a document.
const PATH_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'%');

/// Decoded site-local path (internal representation)
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts with `/`
/// - Route paths carry no trailing slash; the root is exactly `/`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// Create from a browser-shaped path (decode percent-encoding, strip
    /// query and fragment).
    pub fn from_browser(encoded: &str) -> Self {
        let path = encoded.split(['?', '#']).next().unwrap_or(encoded);
        let decoded = percent_decode_str(path)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| path.to_string());
        Self::from_route(&decoded)
    }

    /// Create a route path. Normalizes leading/trailing slashes and strips
    /// query string and fragment.
    pub fn from_route(decoded: &str) -> Self {
        let trimmed = decoded.trim();

        if trimmed.is_empty() || trimmed == "/" {
            return Self(Arc::from("/"));
        }

        let path = Self::strip_query_fragment(trimmed);

        let with_leading = if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };

        // Routes are canonical without a trailing slash
        let normalized = with_leading.trim_end_matches('/');
        if normalized.is_empty() {
            Self(Arc::from("/"))
        } else {
            Self(Arc::from(normalized))
        }
    }

    /// Create an asset path (no trailing-slash normalization).
    pub fn from_asset(decoded: &str) -> Self {
        let trimmed = decoded.trim();

        if trimmed.is_empty() {
            return Self(Arc::from("/"));
        }

        let normalized = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };

        Self(Arc::from(normalized))
    }

    /// Strip query string and fragment from a path using the url crate.
    fn strip_query_fragment(path: &str) -> String {
        // A dummy base URL lets the url crate parse bare paths
        static BASE: std::sync::OnceLock<url::Url> = std::sync::OnceLock::new();
        let base = BASE.get_or_init(|| url::Url::parse("http://x").unwrap());

        match base.join(path) {
            Ok(parsed) => {
                // url returns the path percent-encoded, decode it back
                percent_decode_str(parsed.path())
                    .decode_utf8()
                    .map(|s| s.into_owned())
                    .unwrap_or_else(|_| parsed.path().to_string())
            }
            // Fallback to a simple split if url parsing fails
            Err(_) => path.split(['?', '#']).next().unwrap_or(path).to_string(),
        }
    }

    /// Get the decoded path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Encode for re-insertion into a document (percent-encode specials).
    pub fn to_encoded(&self) -> String {
        utf8_percent_encode(&self.0, PATH_ESCAPE).to_string()
    }

    /// Check if this is the site root.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.as_ref() == "/"
    }
}

impl std::fmt::Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for UrlPath {
    fn default() -> Self {
        Self(Arc::from("/"))
    }
}

impl AsRef<str> for UrlPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for UrlPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UrlPath {
    fn from(s: &str) -> Self {
        Self::from_route(s)
    }
}

impl From<String> for UrlPath {
    fn from(s: String) -> Self {
        Self::from_route(&s)
    }
}

impl PartialEq<str> for UrlPath {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for UrlPath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for UrlPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UrlPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_route(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_route_root() {
        assert_eq!(UrlPath::from_route("/").as_str(), "/");
        assert_eq!(UrlPath::from_route("").as_str(), "/");
        assert_eq!(UrlPath::from_route("  ").as_str(), "/");
    }

    #[test]
    fn test_from_route_drops_trailing_slash() {
        assert_eq!(UrlPath::from_route("/about/").as_str(), "/about");
        assert_eq!(
            UrlPath::from_route("/services/lending/").as_str(),
            "/services/lending"
        );
    }

    #[test]
    fn test_from_route_adds_leading_slash() {
        assert_eq!(UrlPath::from_route("about").as_str(), "/about");
    }

    #[test]
    fn test_from_route_strips_query_and_fragment() {
        assert_eq!(UrlPath::from_route("/about?v=1").as_str(), "/about");
        assert_eq!(UrlPath::from_route("/about#team").as_str(), "/about");
        assert_eq!(UrlPath::from_route("/about?v=1#team").as_str(), "/about");
    }

    #[test]
    fn test_from_browser_decodes() {
        let url = UrlPath::from_browser("/posts/hello%20world");
        assert_eq!(url.as_str(), "/posts/hello world");

        let url = UrlPath::from_browser("/posts/%E4%B8%AD%E6%96%87");
        assert_eq!(url.as_str(), "/posts/中文");
    }

    #[test]
    fn test_from_browser_invalid_utf8_preserved() {
        let url = UrlPath::from_browser("/posts/%FF");
        assert_eq!(url.as_str(), "/posts/%FF");
    }

    #[test]
    fn test_from_asset_keeps_shape() {
        assert_eq!(
            UrlPath::from_asset("/assets/hero.avif").as_str(),
            "/assets/hero.avif"
        );
        assert_eq!(
            UrlPath::from_asset("assets/logo.svg").as_str(),
            "/assets/logo.svg"
        );
    }

    #[test]
    fn test_to_encoded() {
        let url = UrlPath::from_route("/posts/hello world");
        assert_eq!(url.to_encoded(), "/posts/hello%20world");

        // Plain paths pass through untouched
        let url = UrlPath::from_asset("/assets/hero.avif");
        assert_eq!(url.to_encoded(), "/assets/hero.avif");
    }

    #[test]
    fn test_identity_after_normalization() {
        // The same route in different spellings collapses to one identity
        use rustc_hash::FxHashSet;

        let mut set = FxHashSet::default();
        set.insert(UrlPath::from_route("/about"));
        set.insert(UrlPath::from_route("/about/"));
        set.insert(UrlPath::from_browser("/about?utm=1"));

        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_is_root() {
        assert!(UrlPath::from_route("/").is_root());
        assert!(!UrlPath::from_route("/about").is_root());
    }

    #[test]
    fn test_serialize_deserialize() {
        let url = UrlPath::from_route("/services/legal");
        let json = serde_json::to_string(&url).unwrap();
        assert_eq!(json, r#""/services/legal""#);

        let parsed: UrlPath = serde_json::from_str(r#""/services/legal/""#).unwrap();
        assert_eq!(parsed, url);
    }
}
