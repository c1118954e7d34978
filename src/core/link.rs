//! Link classification for hover-intent candidates.

/// Syntactic classification of raw href values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// Full URL with a scheme (https://, mailto:, tel:, etc.)
    External(&'a str),
    /// Pure fragment link (#section). Value is the anchor without `#`.
    Fragment(&'a str),
    /// Site-root-relative path (/about, /services/lending).
    SiteRoot(&'a str),
    /// Everything else: document-relative (./pricing, ../about) and
    /// scheme-relative (//host/path) — both need resolution against a base.
    Relative(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse a raw href into its syntactic kind.
    #[inline]
    pub fn parse(href: &'a str) -> Self {
        if has_scheme(href) {
            Self::External(href)
        } else if let Some(anchor) = href.strip_prefix('#') {
            Self::Fragment(anchor)
        } else if href.starts_with("//") {
            // Scheme-relative URLs inherit the page scheme but may change host
            Self::Relative(href)
        } else if href.starts_with('/') {
            Self::SiteRoot(href)
        } else {
            Self::Relative(href)
        }
    }
}

/// Check whether a href starts with a URL scheme (`name:`).
///
/// A valid scheme has at least one character before the colon, starts with
/// an ASCII letter, and contains only ASCII alphanumerics or `+`, `-`, `.`.
fn has_scheme(href: &str) -> bool {
    let Some(colon) = href.find(':') else {
        return false;
    };
    let scheme = &href[..colon];
    let mut chars = scheme.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
