//! `plan` command: show the hints held once a route settles.
//!
//! Mounts the engine, navigates to the requested route, advances a manual
//! clock past the prefetch delay, and prints the resulting document head
//! — the critical batch plus the route's speculative batch.

use std::sync::Arc;

use anyhow::Result;
use serde_json::{Map, Value as JsonValue};

use crate::cli::args::PlanArgs;
use crate::config::PreloadConfig;
use crate::core::{ManualClock, UrlPath};
use crate::engine::Prioritizer;
use crate::hint::{DocumentHead, HintRecord};
use crate::log;

pub fn run(args: &PlanArgs, config: &PreloadConfig) -> Result<()> {
    let head = Arc::new(DocumentHead::new());
    let clock = Arc::new(ManualClock::new());
    let mut engine = Prioritizer::from_config(config, head.clone(), clock.clone());

    let route = UrlPath::from_route(&args.route);
    engine.mount(&args.images);
    engine.navigate(route.clone());

    // Let the prefetch deadline pass, then fire the batch
    clock.advance(config.routes.delay());
    engine.poll();

    if args.json {
        let records: Vec<JsonValue> = engine
            .registry()
            .snapshot()
            .iter()
            .map(format_record)
            .collect();
        let output = if args.pretty {
            serde_json::to_string_pretty(&records)?
        } else {
            serde_json::to_string(&records)?
        };
        println!("{output}");
    } else {
        print!("{}", head.render());
        log!("plan"; "{} hint(s) once {} settles", engine.registry().len(), route);
    }

    Ok(())
}

/// Format one registry record with target and rel first.
fn format_record(record: &HintRecord) -> JsonValue {
    let mut obj = Map::new();
    obj.insert(
        "target".to_string(),
        JsonValue::String(record.spec.target.to_string()),
    );
    obj.insert(
        "rel".to_string(),
        JsonValue::String(record.spec.intent.rel().to_string()),
    );

    let spec_value = serde_json::to_value(&record.spec).unwrap_or_default();
    if let JsonValue::Object(spec_obj) = spec_value {
        for (key, value) in spec_obj {
            if key != "target" {
                obj.insert(key, value);
            }
        }
    }

    JsonValue::Object(obj)
}
