//! `[hover]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [hover]
//! enable = true
//! ```

use serde::{Deserialize, Serialize};

/// Hover-intent prefetch settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverConfig {
    /// Enable hover-based prefetching.
    pub enable: bool,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self { enable: true }
    }
}
