//! Where hints materialize.
//!
//! The document head is not ambient global state; it is an injected
//! collaborator. The registry owns identity and lifecycle, the sink only
//! materializes, so no sink implementation can break the de-duplication
//! invariant.

use super::types::{HintHandle, HintSpec};

/// Materialization backend for registered hints.
pub trait HintSink: Send + Sync {
    /// Materialize a newly registered hint. Fetching begins browser-side
    /// as soon as the hint is visible; nothing here may block.
    fn attach(&self, handle: HintHandle, spec: &HintSpec);

    /// Tear down a previously attached hint. Called at most once per
    /// handle; unknown handles are never passed in.
    fn detach(&self, handle: HintHandle);
}

/// Sink that materializes nothing.
///
/// A complete failure of the subsystem degrades to default browser
/// loading behavior; wiring this sink in is that degradation made
/// explicit.
pub struct NullSink;

impl HintSink for NullSink {
    fn attach(&self, _handle: HintHandle, _spec: &HintSpec) {}
    fn detach(&self, _handle: HintHandle) {}
}
