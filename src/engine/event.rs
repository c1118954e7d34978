//! Engine input events.
//!
//! ```text
//! host (router, pointer listener, fetch callbacks)
//!   --Event--> Driver --calls--> Prioritizer
//! ```

use crate::core::UrlPath;
use crate::hint::FetchOutcome;
use crate::prefetch::PointerEnter;

/// Messages to the engine driver
#[derive(Debug)]
pub enum Event {
    /// Route path changed
    Navigate(UrlPath),
    /// Pointer entered an element (capture-phase observation)
    PointerEnter(PointerEnter),
    /// A hinted fetch settled browser-side
    Settled {
        target: UrlPath,
        outcome: FetchOutcome,
    },
    /// Tear down the page shell and exit
    Shutdown,
}
