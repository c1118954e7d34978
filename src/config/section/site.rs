//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://example.com"
//! ```
//!
//! The URL defines the page origin; hover prefetching refuses to hint
//! anything that resolves off it.

use serde::{Deserialize, Serialize};

/// Site identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute site URL (scheme + host, optional port).
    pub url: Option<String>,
}
