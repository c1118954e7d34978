//! The resource-hint primitive.
//!
//! A hint is an instruction to the browser to fetch or prepare a resource
//! ahead of its use, without blocking rendering. Everything else in the
//! engine (critical loader, route-prefetcher, hover prefetcher) is a
//! consumer of this module.
//!
//! ```text
//! HintSpec ──register──▶ HintRegistry ──attach──▶ HintSink (document head)
//!                             │
//!                             └──settle──▶ HintObserver (instrumentation)
//! ```

mod batch;
mod head;
mod intent;
mod observer;
mod registry;
mod sink;
mod types;

pub use batch::Batch;
pub use head::DocumentHead;
pub use intent::Intent;
pub use observer::{FetchOutcome, HintObserver, LogObserver};
pub use registry::{HintRecord, HintRegistry, Registered};
pub use sink::{HintSink, NullSink};
pub use types::{CrossOrigin, HintError, HintHandle, HintKey, HintSpec};
