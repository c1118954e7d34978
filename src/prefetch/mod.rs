//! Speculative prefetching: route-based and hover-based.

mod adjacency;
mod event;
mod hover;
mod route;

pub use adjacency::AdjacencyMap;
pub use event::{ElementNode, PointerEnter};
pub use hover::HoverPrefetcher;
pub use route::{DEFAULT_DELAY_MS, RoutePrefetcher};
