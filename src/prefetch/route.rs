//! Route-based prefetching with delayed, cancellable scheduling.
//!
//! On every navigation the prefetcher arms a single delay before creating
//! speculative hints for the likely next routes, so prefetches never
//! compete with the new route's own critical fetches. A navigation inside
//! the window cancels the pending batch wholesale: a rapid sequence of
//! route changes only ever prefetches for the final settled route.

use std::sync::Arc;
use std::time::Duration;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::core::{Clock, UrlPath};
use crate::debug;
use crate::hint::{Batch, HintRegistry, HintSpec};

use super::adjacency::AdjacencyMap;

/// Delay between a navigation settling and its prefetch batch, in
/// milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 2000;

/// Two states: idle, or one armed deadline. Never more than one.
enum State {
    Idle,
    Scheduled { route: UrlPath, deadline: Duration },
}

/// Per-navigation speculative prefetcher.
pub struct RoutePrefetcher {
    adjacency: AdjacencyMap,
    /// Extra candidates merged into every route's set.
    extra: Vec<UrlPath>,
    delay: Duration,
    clock: Arc<dyn Clock>,
    state: State,
    /// Most recent batch, pending or completed.
    batch: Batch,
}

impl RoutePrefetcher {
    pub fn new(
        adjacency: AdjacencyMap,
        extra: Vec<UrlPath>,
        delay: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            adjacency,
            extra,
            delay,
            clock,
            state: State::Idle,
            batch: Batch::new(),
        }
    }

    /// React to a navigation: drop whatever the previous route scheduled
    /// or created, then arm the delay for the new route.
    pub fn navigate(&mut self, route: UrlPath, registry: &HintRegistry) {
        let dropped = self.batch.clear(registry);
        if dropped > 0 {
            debug!("prefetch"; "dropped {dropped} hint(s) from previous route");
        }
        self.state = State::Scheduled {
            deadline: self.clock.now() + self.delay,
            route,
        };
    }

    /// Fire the pending batch if its deadline has passed. Returns the
    /// number of hints created.
    pub fn poll(&mut self, registry: &HintRegistry) -> usize {
        match &self.state {
            State::Scheduled { deadline, .. } if self.clock.now() >= *deadline => {}
            _ => return 0,
        }

        let State::Scheduled { route, .. } = std::mem::replace(&mut self.state, State::Idle)
        else {
            return 0;
        };

        let mut seen = FxHashSet::default();
        let candidates: SmallVec<[UrlPath; 4]> = self
            .adjacency
            .candidates(&route)
            .iter()
            .chain(self.extra.iter())
            .filter(|candidate| seen.insert((*candidate).clone()))
            .cloned()
            .collect();

        for candidate in candidates {
            self.batch
                .record(registry.register(HintSpec::for_route(candidate)));
        }

        let created = self.batch.len();
        if created > 0 {
            debug!("prefetch"; "{created} candidate(s) for {route}");
        }
        created
    }

    /// How long a host loop may sleep before the next `poll` can do work.
    /// `None` when nothing is scheduled.
    pub fn sleep_duration(&self) -> Option<Duration> {
        match &self.state {
            State::Idle => None,
            State::Scheduled { deadline, .. } => Some(
                deadline
                    .saturating_sub(self.clock.now())
                    .max(Duration::from_millis(1)),
            ),
        }
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(self.state, State::Scheduled { .. })
    }

    /// Cancel any pending deadline and remove the latest batch.
    pub fn shutdown(&mut self, registry: &HintRegistry) {
        self.state = State::Idle;
        self.batch.clear(registry);
    }
}
