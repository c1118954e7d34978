//! The prioritization engine.
//!
//! `Prioritizer` composes the registry with its three consumers behind a
//! single surface. Ordering guarantee: critical hints are created
//! synchronously on mount, strictly before any prefetch deadline can be
//! armed for the same activation; prefetch work only ever happens in
//! `poll`.

mod driver;
mod event;

pub use driver::Driver;
pub use event::Event;

use std::sync::Arc;
use std::time::Duration;

use crate::config::PreloadConfig;
use crate::core::{Clock, UrlPath};
use crate::hint::{FetchOutcome, HintRegistry, HintSink, LogObserver};
use crate::loader::CriticalLoader;
use crate::prefetch::{HoverPrefetcher, PointerEnter, RoutePrefetcher};

/// One page shell's resource prioritization.
pub struct Prioritizer {
    registry: Arc<HintRegistry>,
    critical: CriticalLoader,
    route: RoutePrefetcher,
    hover: Option<HoverPrefetcher>,
}

impl Prioritizer {
    pub fn new(
        registry: Arc<HintRegistry>,
        critical: CriticalLoader,
        route: RoutePrefetcher,
        hover: Option<HoverPrefetcher>,
    ) -> Self {
        Self {
            registry,
            critical,
            route,
            hover,
        }
    }

    /// Assemble an engine from configuration.
    pub fn from_config(
        config: &PreloadConfig,
        sink: Arc<dyn HintSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let mut registry = HintRegistry::new(sink);
        if config.instrument.enable {
            registry = registry.with_observer(Box::new(LogObserver));
        }
        let registry = Arc::new(registry);

        let critical = CriticalLoader::new(config.critical_specs());
        let route = RoutePrefetcher::new(
            config.routes.adjacency.clone(),
            config.routes.extra.clone(),
            config.routes.delay(),
            clock,
        );
        let hover = config
            .hover
            .enable
            .then(|| config.origin().map(HoverPrefetcher::new))
            .flatten();

        Self::new(registry, critical, route, hover)
    }

    /// Activate the page shell: register the critical batch.
    ///
    /// Synchronous: when this returns, every critical hint is live and
    /// no prefetch deadline has been armed yet.
    pub fn mount(&mut self, additional_images: &[String]) -> usize {
        self.critical.mount(&self.registry, additional_images)
    }

    /// React to a navigation.
    pub fn navigate(&mut self, route: UrlPath) {
        if let Some(hover) = &mut self.hover {
            hover.set_location(&route);
        }
        self.route.navigate(route, &self.registry);
    }

    /// Handle a pointer-enter observation.
    pub fn pointer_enter(&self, event: &PointerEnter) -> Option<UrlPath> {
        self.hover
            .as_ref()
            .and_then(|hover| hover.pointer_enter(event, &self.registry))
    }

    /// Fire any due prefetch batch. Returns the number of hints created.
    pub fn poll(&mut self) -> usize {
        self.route.poll(&self.registry)
    }

    /// How long the host may sleep before `poll` can do work.
    pub fn sleep_duration(&self) -> Option<Duration> {
        self.route.sleep_duration()
    }

    /// Report a fetch settlement.
    pub fn settle(&self, target: &UrlPath, outcome: FetchOutcome) {
        self.registry.settle(target, outcome);
    }

    /// Deactivate the page shell: the critical batch and any route batch
    /// (pending or completed) are removed. Hover hints stay; they are
    /// page-session-scoped, released with the page itself.
    pub fn unmount(&mut self) {
        self.critical.unmount(&self.registry);
        self.route.shutdown(&self.registry);
    }

    /// The live registry.
    pub fn registry(&self) -> &HintRegistry {
        &self.registry
    }
}
