//! Hover-intent prefetching.
//!
//! Pointer entry over a link is the strongest cheap predictor of an
//! imminent navigation. Each qualifying hover produces at most one
//! speculative hint, de-duplicated against whatever is already live; the
//! hints are intentionally never removed individually. They accumulate
//! for the page session, bounded by the number of distinct same-origin
//! links a visitor actually hovers.

use url::Url;

use crate::core::{UrlPath, resolve_same_origin};
use crate::debug;
use crate::hint::{HintRegistry, HintSpec, Registered};

use super::event::PointerEnter;

/// Session-scoped hover prefetcher.
pub struct HoverPrefetcher {
    /// Site origin; hrefs resolving off it never produce hints.
    origin: Url,
    /// Current document URL, so document-relative hrefs resolve the way
    /// the browser would resolve them.
    location: Url,
}

impl HoverPrefetcher {
    pub fn new(origin: Url) -> Self {
        Self {
            location: origin.clone(),
            origin,
        }
    }

    /// Track a navigation so relative hrefs resolve against the page the
    /// visitor is actually on.
    pub fn set_location(&mut self, route: &UrlPath) {
        if let Ok(location) = self.origin.join(route.as_str()) {
            self.location = location;
        }
    }

    /// Handle one pointer-enter observation. Returns the prefetched path
    /// when a new hint was created.
    ///
    /// Every rejection is silent: no enclosing anchor, unparseable or
    /// cross-origin destination, or an identical speculative hint already
    /// live.
    pub fn pointer_enter(
        &self,
        event: &PointerEnter,
        registry: &HintRegistry,
    ) -> Option<UrlPath> {
        let href = event.nearest_href()?;
        let path = resolve_same_origin(href, &self.location)?;

        if registry.has_speculative(&path) {
            return None;
        }

        match registry.register(HintSpec::for_route(path.clone())) {
            Registered::Created(_) => {
                debug!("hover"; "prefetch {path}");
                Some(path)
            }
            Registered::Duplicate => None,
        }
    }
}
