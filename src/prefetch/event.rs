//! Pointer-enter events as data.
//!
//! The host observes hover intent with one capturing listener at the
//! document root (pointer-enter does not bubble, so capture is the only
//! way to see entry into nested anchor contents without per-element
//! listeners). What reaches the engine is a snapshot of the element chain
//! from the event target up to the root, leaf first: enough to resolve
//! the nearest enclosing anchor without a DOM.

/// One element on the chain from event target to document root.
#[derive(Debug, Clone)]
pub struct ElementNode {
    /// Lowercase tag name.
    pub tag: String,
    /// Raw href attribute, if present.
    pub href: Option<String>,
}

impl ElementNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            href: None,
        }
    }

    pub fn with_href(tag: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            href: Some(href.into()),
        }
    }
}

/// A pointer-enter observation.
#[derive(Debug, Clone, Default)]
pub struct PointerEnter {
    /// Element chain, event target first, document root last.
    pub chain: Vec<ElementNode>,
}

impl PointerEnter {
    pub fn new(chain: Vec<ElementNode>) -> Self {
        Self { chain }
    }

    /// Pointer entered `<a href>` directly.
    pub fn over_anchor(href: impl Into<String>) -> Self {
        Self::new(vec![ElementNode::with_href("a", href)])
    }

    /// Nearest enclosing anchor-like element with a non-empty href,
    /// walking outward from the event target (`closest("a[href]")`).
    pub fn nearest_href(&self) -> Option<&str> {
        self.chain
            .iter()
            .filter(|node| matches!(node.tag.as_str(), "a" | "area"))
            .find_map(|node| node.href.as_deref().filter(|href| !href.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_anchor() {
        let event = PointerEnter::over_anchor("/about");
        assert_eq!(event.nearest_href(), Some("/about"));
    }

    #[test]
    fn test_nested_content_resolves_enclosing_anchor() {
        // <a href="/services/lending"><span><img></span></a>
        let event = PointerEnter::new(vec![
            ElementNode::new("img"),
            ElementNode::new("span"),
            ElementNode::with_href("a", "/services/lending"),
            ElementNode::new("nav"),
            ElementNode::new("body"),
        ]);
        assert_eq!(event.nearest_href(), Some("/services/lending"));
    }

    #[test]
    fn test_innermost_anchor_wins() {
        let event = PointerEnter::new(vec![
            ElementNode::with_href("a", "/inner"),
            ElementNode::with_href("a", "/outer"),
        ]);
        assert_eq!(event.nearest_href(), Some("/inner"));
    }

    #[test]
    fn test_no_anchor_in_chain() {
        let event = PointerEnter::new(vec![
            ElementNode::new("p"),
            ElementNode::new("main"),
            ElementNode::new("body"),
        ]);
        assert_eq!(event.nearest_href(), None);
    }

    #[test]
    fn test_anchor_without_href_ignored() {
        let event = PointerEnter::new(vec![ElementNode::new("a")]);
        assert_eq!(event.nearest_href(), None);
    }

    #[test]
    fn test_empty_href_ignored_but_outer_found() {
        let event = PointerEnter::new(vec![
            ElementNode::with_href("a", ""),
            ElementNode::with_href("a", "/about"),
        ]);
        assert_eq!(event.nearest_href(), Some("/about"));
    }

    #[test]
    fn test_area_counts_as_anchor() {
        let event = PointerEnter::new(vec![ElementNode::with_href("area", "/map")]);
        assert_eq!(event.nearest_href(), Some("/map"));
    }
}
