//! headstart — resource-hint prioritization for component-routed sites.
//!
//! Decides, for a given navigation state, which resources to fetch ahead
//! of need, in what order and under what conditions, without blocking
//! rendering or double-fetching:
//!
//! - **critical loader**: eager preload hints for the page shell's
//!   essential assets, torn down as a batch on unmount;
//! - **route-prefetcher**: delayed, cancellable speculative hints for the
//!   likely next routes (last navigation wins);
//! - **hover prefetcher**: one-shot speculative hints on pointer entry
//!   over same-origin links, de-duplicated against the live registry.
//!
//! The document head is an injected sink, time an injected clock, and
//! pointer events plain data — the engine runs deterministically with no
//! browser in sight.

pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod hint;
pub mod loader;
pub mod logger;
pub mod prefetch;
pub mod utils;
