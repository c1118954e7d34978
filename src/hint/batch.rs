//! Hint batches.
//!
//! A batch is the set of hints created by one consumer activation,
//! removed together as a unit. Clearing targets exactly the recorded
//! handles; duplicates record nothing, so a clear can never tear down
//! another consumer's live hint.

use super::registry::{HintRegistry, Registered};
use super::types::HintHandle;

/// Handles created together, removed together.
#[derive(Debug, Default)]
pub struct Batch {
    handles: Vec<HintHandle>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a registration outcome. Only created handles are kept.
    pub fn record(&mut self, outcome: Registered) {
        if let Some(handle) = outcome.handle() {
            self.handles.push(handle);
        }
    }

    /// Remove every hint in this batch from the registry.
    ///
    /// Safe against double-clear: the batch drains itself, and removal of
    /// an already-dead handle is a registry no-op anyway.
    pub fn clear(&mut self, registry: &HintRegistry) -> usize {
        let count = self.handles.len();
        for handle in self.handles.drain(..) {
            registry.remove(handle);
        }
        count
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
