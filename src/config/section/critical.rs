//! `[critical]` section configuration.
//!
//! The fixed set of resources preloaded eagerly on every page-shell
//! mount: the hero image, the brand logo, and any fonts the first paint
//! depends on.
//!
//! # Example
//!
//! ```toml
//! [critical]
//! images = ["/assets/hero.avif", "/assets/logo.svg"]
//! fonts = ["/fonts/serif.woff2"]
//! ```

use serde::{Deserialize, Serialize};

/// Critical-resource list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CriticalConfig {
    /// Image paths preloaded with `as="image"`.
    pub images: Vec<String>,

    /// Font paths preloaded with `as="font"`. Fonts are fetched with
    /// `crossorigin="anonymous"` — font preloads require CORS mode even
    /// on the same origin.
    pub fonts: Vec<String>,
}

impl CriticalConfig {
    /// Total number of configured resources.
    pub fn len(&self) -> usize {
        self.images.len() + self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.fonts.is_empty()
    }
}
