//! `simulate` command: replay a recorded event script.
//!
//! Scenarios drive the engine on a manual clock, so a sequence of
//! navigations, hovers, waits, and settlements plays back exactly the
//! same way every run.
//!
//! # Scenario format
//!
//! ```json
//! {
//!   "start": "/",
//!   "events": [
//!     { "wait": 1000 },
//!     { "navigate": "/about" },
//!     { "wait": 2000 },
//!     { "hover": "/contact" },
//!     { "settled": { "target": "/assets/hero.avif", "outcome": "failed" } }
//!   ]
//! }
//! ```

use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Value as JsonValue, json};

use crate::cli::args::SimulateArgs;
use crate::config::PreloadConfig;
use crate::core::{ManualClock, UrlPath};
use crate::engine::Prioritizer;
use crate::hint::{DocumentHead, FetchOutcome};
use crate::log;
use crate::prefetch::PointerEnter;

/// A recorded interaction script.
#[derive(Debug, Deserialize)]
struct Scenario {
    /// Initial route, navigated to right after mount.
    #[serde(default)]
    start: Option<UrlPath>,

    /// Extra critical images for the mount batch.
    #[serde(default)]
    additional_images: Vec<String>,

    events: Vec<ScenarioEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ScenarioEvent {
    /// Advance virtual time by this many milliseconds.
    Wait(u64),
    /// Route change.
    Navigate(UrlPath),
    /// Pointer entered an anchor with this href.
    Hover(String),
    /// A hinted fetch settled.
    Settled { target: String, outcome: Outcome },
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Outcome {
    Loaded,
    Failed,
}

impl From<Outcome> for FetchOutcome {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Loaded => Self::Loaded,
            Outcome::Failed => Self::Failed,
        }
    }
}

pub fn run(args: &SimulateArgs, config: &PreloadConfig) -> Result<()> {
    let scenario = read_scenario(&args.scenario)?;

    let head = Arc::new(DocumentHead::new());
    let clock = Arc::new(ManualClock::new());
    let mut engine = Prioritizer::from_config(config, head.clone(), clock.clone());

    let quiet = args.json;
    let mut timeline = Vec::new();
    let mut elapsed = Duration::ZERO;

    let mounted = engine.mount(&scenario.additional_images);
    timeline.push(entry(elapsed, "mount", json!({ "critical": mounted })));
    if !quiet {
        log!("simulate"; "t=0ms mount ({mounted} critical)");
    }

    if let Some(start) = &scenario.start {
        engine.navigate(start.clone());
        timeline.push(entry(elapsed, "navigate", json!(start)));
        if !quiet {
            log!("simulate"; "t=0ms navigate {start}");
        }
    }

    for event in &scenario.events {
        let t = elapsed.as_millis();
        match event {
            ScenarioEvent::Wait(ms) => {
                let delta = Duration::from_millis(*ms);
                clock.advance(delta);
                elapsed += delta;
                let created = engine.poll();
                timeline.push(entry(
                    elapsed,
                    "wait",
                    json!({ "ms": ms, "prefetched": created }),
                ));
                if !quiet {
                    log!("simulate"; "t={}ms wait {ms}ms ({created} prefetched)", elapsed.as_millis());
                }
            }
            ScenarioEvent::Navigate(route) => {
                engine.navigate(route.clone());
                timeline.push(entry(elapsed, "navigate", json!(route)));
                if !quiet {
                    log!("simulate"; "t={t}ms navigate {route}");
                }
            }
            ScenarioEvent::Hover(href) => {
                let created = engine.pointer_enter(&PointerEnter::over_anchor(href.clone()));
                timeline.push(entry(
                    elapsed,
                    "hover",
                    json!({ "href": href, "prefetched": created }),
                ));
                if !quiet {
                    match &created {
                        Some(path) => log!("simulate"; "t={t}ms hover {href} -> prefetch {path}"),
                        None => log!("simulate"; "t={t}ms hover {href} (skipped)"),
                    }
                }
            }
            ScenarioEvent::Settled { target, outcome } => {
                engine.settle(&UrlPath::from_asset(target), (*outcome).into());
                timeline.push(entry(elapsed, "settled", json!(target)));
                if !quiet {
                    log!("simulate"; "t={t}ms settled {target}");
                }
            }
        }
    }

    let rendered = head.render();
    if args.json {
        let head_lines: Vec<&str> = rendered.lines().collect();
        let output = json!({ "timeline": timeline, "head": head_lines });
        let formatted = if args.pretty {
            serde_json::to_string_pretty(&output)?
        } else {
            serde_json::to_string(&output)?
        };
        println!("{formatted}");
    } else {
        print!("{rendered}");
        log!("simulate"; "{} hint(s) live after {}ms", engine.registry().len(), elapsed.as_millis());
    }

    Ok(())
}

/// One timeline row.
fn entry(elapsed: Duration, event: &str, detail: JsonValue) -> JsonValue {
    json!({ "t": elapsed.as_millis() as u64, "event": event, "detail": detail })
}

/// Read a scenario from a file, or from stdin when the path is `-`.
fn read_scenario(path: &Path) -> Result<Scenario> {
    let content = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read scenario from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario `{}`", path.display()))?
    };

    serde_json::from_str(&content).context("failed to parse scenario")
}
