//! `[routes]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [routes]
//! delay = 2000                  # ms between navigation and prefetch
//! extra = ["/contact"]          # merged into every route's candidates
//!
//! [routes.adjacency]
//! "/" = ["/about", "/contact"]
//! "/about" = ["/contact"]
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::UrlPath;
use crate::prefetch::{AdjacencyMap, DEFAULT_DELAY_MS};

/// Route-prefetch settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Milliseconds between a navigation settling and its prefetch batch,
    /// so prefetches never compete with the route's own critical fetches.
    pub delay: u64,

    /// Candidates merged into every route's set.
    pub extra: Vec<UrlPath>,

    /// Route → ordered likely-next routes.
    pub adjacency: AdjacencyMap,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY_MS,
            extra: Vec::new(),
            adjacency: AdjacencyMap::new(),
        }
    }
}

impl RoutesConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;
    use crate::core::UrlPath;

    #[test]
    fn test_routes_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.routes.delay, 2000);
        assert!(config.routes.extra.is_empty());
        assert!(config.routes.adjacency.is_empty());
    }

    #[test]
    fn test_routes_adjacency_table() {
        let config = test_parse_config(
            r#"
[routes]
delay = 1500
extra = ["/contact"]

[routes.adjacency]
"/" = ["/about", "/contact"]
"/about" = ["/contact"]
"#,
        );
        assert_eq!(config.routes.delay, 1500);
        assert_eq!(config.routes.extra, vec![UrlPath::from_route("/contact")]);
        assert_eq!(
            config
                .routes
                .adjacency
                .candidates(&UrlPath::from_route("/"))
                .len(),
            2
        );
    }
}
