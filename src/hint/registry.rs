//! Document-level hint registry.
//!
//! The set of currently active hints, keyed by identity. All mutations
//! happen on the host's UI thread; the mutex is there so the registry can
//! be shared with an async driver, not for contention.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::UrlPath;
use crate::debug;

use super::observer::{FetchOutcome, HintObserver};
use super::sink::HintSink;
use super::types::{HintHandle, HintKey, HintSpec};

/// Outcome of a registration attempt.
///
/// A duplicate identity is a normal outcome, not an error: the hint
/// already exists, nothing was created, and the caller has no handle to
/// clean up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registered {
    Created(HintHandle),
    Duplicate,
}

impl Registered {
    /// The created handle, if one was.
    pub fn handle(self) -> Option<HintHandle> {
        match self {
            Self::Created(handle) => Some(handle),
            Self::Duplicate => None,
        }
    }
}

/// Snapshot entry for inspection output.
#[derive(Debug, Clone)]
pub struct HintRecord {
    pub handle: HintHandle,
    pub spec: HintSpec,
}

/// The live hint set.
pub struct HintRegistry {
    inner: Mutex<Inner>,
    sink: Arc<dyn HintSink>,
    observer: Option<Box<dyn HintObserver>>,
}

#[derive(Default)]
struct Inner {
    /// Live hints by handle id
    entries: FxHashMap<u64, HintSpec>,
    /// Identity index enforcing the de-duplication invariant
    identities: FxHashSet<HintKey>,
    /// Registration order of live handle ids
    order: Vec<u64>,
    next_id: u64,
}

impl HintRegistry {
    pub fn new(sink: Arc<dyn HintSink>) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            sink,
            observer: None,
        }
    }

    /// Attach a settlement observer.
    pub fn with_observer(mut self, observer: Box<dyn HintObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Register a hint and materialize it through the sink.
    ///
    /// If a hint with the same identity is already live, nothing happens
    /// and `Registered::Duplicate` is returned.
    pub fn register(&self, spec: HintSpec) -> Registered {
        let key = spec.key();
        let handle = {
            let mut inner = self.inner.lock();
            if inner.identities.contains(&key) {
                return Registered::Duplicate;
            }
            let id = inner.next_id;
            inner.next_id += 1;
            inner.identities.insert(key);
            inner.entries.insert(id, spec.clone());
            inner.order.push(id);
            HintHandle { id }
        };

        self.sink.attach(handle, &spec);
        debug!("preload"; "{} {} ({})", spec.intent.rel(), spec.target, spec.intent);
        Registered::Created(handle)
    }

    /// Remove a registration. Idempotent: a handle already removed, or one
    /// never registered here, is a no-op.
    pub fn remove(&self, handle: HintHandle) {
        let removed = {
            let mut inner = self.inner.lock();
            let Some(spec) = inner.entries.remove(&handle.id) else {
                return;
            };
            inner.identities.remove(&spec.key());
            inner.order.retain(|id| *id != handle.id);
            spec
        };

        self.sink.detach(handle);
        debug!("preload"; "removed {}", removed.target);
    }

    /// Whether a hint with this identity is live.
    pub fn has(&self, key: &HintKey) -> bool {
        self.inner.lock().identities.contains(key)
    }

    /// Whether a speculative navigation hint for `route` is live.
    pub fn has_speculative(&self, route: &UrlPath) -> bool {
        self.has(&HintKey::speculative(route))
    }

    /// Number of live hints.
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }

    /// Live hints in registration order.
    pub fn snapshot(&self) -> Vec<HintRecord> {
        let inner = self.inner.lock();
        inner
            .order
            .iter()
            .filter_map(|id| {
                inner.entries.get(id).map(|spec| HintRecord {
                    handle: HintHandle { id: *id },
                    spec: spec.clone(),
                })
            })
            .collect()
    }

    /// Report a fetch settlement to the observer, if any.
    ///
    /// Observer faults must never reach hint lifecycle, so the call is
    /// isolated from both the registry lock and the caller's unwinding.
    pub fn settle(&self, target: &UrlPath, outcome: FetchOutcome) {
        if let Some(observer) = &self.observer {
            let _ = catch_unwind(AssertUnwindSafe(|| observer.on_settled(target, outcome)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hint::{Intent, NullSink};

    /// Sink that records attach/detach calls for assertions.
    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<String>>,
    }

    impl RecordingSink {
        fn events(&self) -> Vec<String> {
            self.events.lock().clone()
        }
    }

    impl HintSink for RecordingSink {
        fn attach(&self, _handle: HintHandle, spec: &HintSpec) {
            self.events.lock().push(format!("attach {}", spec.target));
        }
        fn detach(&self, _handle: HintHandle) {
            self.events.lock().push("detach".to_string());
        }
    }

    fn registry() -> HintRegistry {
        HintRegistry::new(Arc::new(NullSink))
    }

    #[test]
    fn test_register_and_remove() {
        let reg = registry();
        let handle = reg
            .register(HintSpec::image("/assets/hero.avif").unwrap())
            .handle()
            .unwrap();

        assert_eq!(reg.len(), 1);
        reg.remove(handle);
        assert!(reg.is_empty());
    }

    #[test]
    fn test_duplicate_identity_skipped() {
        let reg = registry();
        assert!(matches!(
            reg.register(HintSpec::navigation("/about").unwrap()),
            Registered::Created(_)
        ));
        assert_eq!(
            reg.register(HintSpec::navigation("/about").unwrap()),
            Registered::Duplicate
        );
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_identity_frees_after_removal() {
        let reg = registry();
        let handle = reg
            .register(HintSpec::navigation("/about").unwrap())
            .handle()
            .unwrap();
        reg.remove(handle);

        // The identity is free again once the hint is gone
        assert!(matches!(
            reg.register(HintSpec::navigation("/about").unwrap()),
            Registered::Created(_)
        ));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let reg = registry();
        let keep = reg
            .register(HintSpec::navigation("/contact").unwrap())
            .handle()
            .unwrap();
        let gone = reg
            .register(HintSpec::navigation("/about").unwrap())
            .handle()
            .unwrap();

        reg.remove(gone);
        reg.remove(gone);
        reg.remove(HintHandle { id: 9999 });

        // Unrelated hints are unaffected
        assert_eq!(reg.len(), 1);
        assert!(reg.has_speculative(&UrlPath::from_route("/contact")));
        reg.remove(keep);
        assert!(reg.is_empty());
    }

    #[test]
    fn test_eager_and_speculative_coexist() {
        let reg = registry();
        reg.register(HintSpec::image("/about").unwrap());
        reg.register(HintSpec::navigation("/about").unwrap());
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn test_has_speculative() {
        let reg = registry();
        reg.register(HintSpec::navigation("/about").unwrap());

        assert!(reg.has_speculative(&UrlPath::from_route("/about")));
        assert!(!reg.has_speculative(&UrlPath::from_route("/contact")));
    }

    #[test]
    fn test_sink_sees_attach_and_detach() {
        let sink = Arc::new(RecordingSink::default());
        let reg = HintRegistry::new(sink.clone());

        let handle = reg
            .register(HintSpec::image("/a.png").unwrap())
            .handle()
            .unwrap();
        reg.register(HintSpec::image("/a.png").unwrap()); // duplicate: no attach
        reg.remove(handle);
        reg.remove(handle); // idempotent: no second detach

        assert_eq!(sink.events(), vec!["attach /a.png", "detach"]);
    }

    #[test]
    fn test_snapshot_in_registration_order() {
        let reg = registry();
        reg.register(HintSpec::image("/a.png").unwrap());
        reg.register(HintSpec::new("/app.js", Intent::Script).unwrap());
        reg.register(HintSpec::navigation("/about").unwrap());

        let targets: Vec<_> = reg
            .snapshot()
            .into_iter()
            .map(|r| r.spec.target.to_string())
            .collect();
        assert_eq!(targets, vec!["/a.png", "/app.js", "/about"]);
    }

    #[test]
    fn test_observer_panic_is_contained() {
        struct PanickyObserver;
        impl HintObserver for PanickyObserver {
            fn on_settled(&self, _target: &UrlPath, _outcome: FetchOutcome) {
                panic!("instrumentation bug");
            }
        }

        let reg = registry().with_observer(Box::new(PanickyObserver));
        let handle = reg
            .register(HintSpec::image("/a.png").unwrap())
            .handle()
            .unwrap();

        // The fault stays inside the observer; lifecycle is unaffected
        reg.settle(&UrlPath::from_asset("/a.png"), FetchOutcome::Failed);
        assert_eq!(reg.len(), 1);
        reg.remove(handle);
        assert!(reg.is_empty());
    }
}
