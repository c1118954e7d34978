//! Same-origin resolution of raw hrefs.
//!
//! Speculative hints must never target another origin, so every hover
//! candidate passes through here before a hint is considered.

use url::Url;

use super::link::LinkKind;
use super::url::UrlPath;

/// Resolve a raw href against the page base URL and return its site-local
/// path, or `None` when it is not a navigation target on the same origin.
///
/// Silently rejects:
/// - pure fragment links (same-page anchors)
/// - destinations on a different origin (scheme, host, or port differ)
/// - hrefs that fail URL parsing
pub fn resolve_same_origin(href: &str, base: &Url) -> Option<UrlPath> {
    match LinkKind::parse(href) {
        LinkKind::Fragment(_) => None,
        // A site-root path cannot leave the origin
        LinkKind::SiteRoot(path) => Some(UrlPath::from_browser(path)),
        LinkKind::External(raw) => {
            let url = Url::parse(raw).ok()?;
            same_origin(&url, base).then(|| UrlPath::from_browser(url.path()))
        }
        LinkKind::Relative(rel) => {
            let url = base.join(rel).ok()?;
            same_origin(&url, base).then(|| UrlPath::from_browser(url.path()))
        }
    }
}

/// Compare scheme, host, and port. Opaque origins (mailto:, data:) never
/// match anything, including themselves.
fn same_origin(a: &Url, b: &Url) -> bool {
    let (oa, ob) = (a.origin(), b.origin());
    oa.is_tuple() && oa == ob
}
