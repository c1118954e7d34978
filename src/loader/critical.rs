//! Critical-resource loader.
//!
//! Runs once per mount of the hosting page shell: issues high-priority
//! fetch hints for the fixed set of essential resources (hero image,
//! brand logo, fonts) plus whatever the caller supplies, and tears the
//! whole batch down on unmount. Preload outcomes never affect rendering;
//! failures surface only through the settlement observer.

use crate::debug;
use crate::hint::{Batch, HintRegistry, HintSpec};

/// Mount-scoped loader for the critical batch.
pub struct CriticalLoader {
    /// Fixed resource list, configured once at construction.
    resources: Vec<HintSpec>,
    batch: Batch,
    mounted: bool,
}

impl CriticalLoader {
    pub fn new(resources: Vec<HintSpec>) -> Self {
        Self {
            resources,
            batch: Batch::new(),
            mounted: false,
        }
    }

    /// Activate: register one hint per resource in the fixed list plus
    /// `additional_images` (image intent), as a single batch.
    ///
    /// Re-mounting tears the previous batch down first, so there is no
    /// duplicate registration across remounts.
    pub fn mount(&mut self, registry: &HintRegistry, additional_images: &[String]) -> usize {
        if self.mounted {
            self.unmount(registry);
        }

        for spec in &self.resources {
            self.batch.record(registry.register(spec.clone()));
        }
        for raw in additional_images {
            match HintSpec::image(raw) {
                Ok(spec) => self.batch.record(registry.register(spec)),
                Err(_) => debug!("preload"; "skipping empty critical image entry"),
            }
        }

        self.mounted = true;
        self.batch.len()
    }

    /// Deactivate: remove every hint in the current batch.
    pub fn unmount(&mut self, registry: &HintRegistry) {
        self.batch.clear(registry);
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::hint::{Intent, NullSink};

    fn registry() -> HintRegistry {
        HintRegistry::new(Arc::new(NullSink))
    }

    fn loader() -> CriticalLoader {
        CriticalLoader::new(vec![
            HintSpec::image("/assets/hero.avif").unwrap(),
            HintSpec::image("/assets/logo.svg").unwrap(),
        ])
    }

    #[test]
    fn test_mount_registers_fixed_list() {
        let reg = registry();
        let mut loader = loader();

        assert_eq!(loader.mount(&reg, &[]), 2);
        assert_eq!(reg.len(), 2);
        for record in reg.snapshot() {
            assert_eq!(record.spec.intent, Intent::Image);
        }
    }

    #[test]
    fn test_unmount_leaks_nothing() {
        let reg = registry();
        let mut loader = loader();

        let before = reg.len();
        loader.mount(&reg, &[]);
        loader.unmount(&reg);
        assert_eq!(reg.len(), before);
    }

    #[test]
    fn test_additional_images_join_the_batch() {
        let reg = registry();
        let mut loader = loader();

        loader.mount(&reg, &["/assets/team.webp".to_string()]);
        assert_eq!(reg.len(), 3);

        loader.unmount(&reg);
        assert!(reg.is_empty());
    }

    #[test]
    fn test_remount_does_not_duplicate() {
        let reg = registry();
        let mut loader = loader();

        loader.mount(&reg, &[]);
        loader.mount(&reg, &["/assets/team.webp".to_string()]);

        // Old batch fully replaced by the new one
        assert_eq!(reg.len(), 3);
        loader.unmount(&reg);
        assert!(reg.is_empty());
    }

    #[test]
    fn test_empty_additional_entry_skipped() {
        let reg = registry();
        let mut loader = loader();

        loader.mount(&reg, &[String::new()]);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn test_unmount_before_mount_is_noop() {
        let reg = registry();
        let mut loader = loader();
        loader.unmount(&reg);
        assert!(reg.is_empty());
        assert!(!loader.is_mounted());
    }
}
