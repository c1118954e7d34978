//! Core types shared across the engine.

mod clock;
mod link;
mod origin;
mod url;

pub use clock::{Clock, ManualClock, SystemClock, TokioClock};
pub use link::LinkKind;
pub use origin::resolve_same_origin;
pub use url::UrlPath;
