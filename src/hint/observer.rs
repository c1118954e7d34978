//! Optional instrumentation for hint settlement.
//!
//! Fetch outcomes are reported here and nowhere else: a failed preload is
//! never surfaced to the user and never retried.

use crate::core::UrlPath;
use crate::debug;

/// Terminal outcome of a hinted fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded,
    Failed,
}

impl FetchOutcome {
    pub fn label(self) -> &'static str {
        match self {
            Self::Loaded => "loaded",
            Self::Failed => "failed",
        }
    }
}

/// Settlement observer. Implementations must not assume they can affect
/// hint lifecycle — the registry isolates them from it.
pub trait HintObserver: Send + Sync {
    fn on_settled(&self, target: &UrlPath, outcome: FetchOutcome);
}

/// Observer that logs outcomes, visible under `--verbose`.
pub struct LogObserver;

impl HintObserver for LogObserver {
    fn on_settled(&self, target: &UrlPath, outcome: FetchOutcome) {
        debug!("preload"; "{} {target}", outcome.label());
    }
}
