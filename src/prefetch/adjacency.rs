//! Route adjacency: which pages a visitor is likely to open next.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::UrlPath;

/// Static mapping from a route to its ordered candidate next routes.
///
/// Candidate lists stay short, a handful per route; prefetching
/// everything would defeat the prioritization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyMap {
    routes: FxHashMap<UrlPath, Vec<UrlPath>>,
}

impl AdjacencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the candidate list for a route.
    pub fn insert(&mut self, route: impl Into<UrlPath>, candidates: Vec<UrlPath>) {
        self.routes.insert(route.into(), candidates);
    }

    /// Ordered candidates for a route; empty when the route is unknown.
    pub fn candidates(&self, route: &UrlPath) -> &[UrlPath] {
        self.routes.get(route).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
