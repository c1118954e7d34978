//! Hint intent: what the hinted resource will be consumed as.

use serde::{Deserialize, Serialize};

/// Declared consumption type of a hinted resource.
///
/// The four concrete intents declare what the resource is and fetch
/// eagerly; `Navigation` is advisory — a low-priority hint for a page the
/// user might visit next, which the browser may or may not act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Image,
    Script,
    Style,
    Font,
    Navigation,
}

impl Intent {
    /// Whether this intent is speculative (advisory, opportunistic fetch).
    #[inline]
    pub fn is_speculative(self) -> bool {
        matches!(self, Self::Navigation)
    }

    /// The `rel` attribute the hint materializes with.
    #[inline]
    pub fn rel(self) -> &'static str {
        if self.is_speculative() {
            "prefetch"
        } else {
            "preload"
        }
    }

    /// The `as` attribute, if this intent carries one.
    #[inline]
    pub fn as_attr(self) -> Option<&'static str> {
        match self {
            Self::Image => Some("image"),
            Self::Script => Some("script"),
            Self::Style => Some("style"),
            Self::Font => Some("font"),
            Self::Navigation => None,
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Image => "image",
            Self::Script => "script",
            Self::Style => "style",
            Self::Font => "font",
            Self::Navigation => "navigation",
        };
        write!(f, "{name}")
    }
}
