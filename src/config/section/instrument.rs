//! `[instrument]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [instrument]
//! enable = true
//! ```
//!
//! When enabled, fetch settlements are reported to the logging observer.
//! Instrumentation is observation only — it can never affect whether or
//! how hints are created and removed.

use serde::{Deserialize, Serialize};

/// Settlement instrumentation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InstrumentConfig {
    /// Report preload outcomes through the logger (visible with
    /// `--verbose`).
    pub enable: bool,
}
