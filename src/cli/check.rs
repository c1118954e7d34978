//! `check` command: validate the configuration and report what it wires
//! up. Validation itself already ran during load; this is the summary.

use anyhow::Result;

use crate::config::PreloadConfig;
use crate::log;

pub fn run(config: &PreloadConfig) -> Result<()> {
    log!("check"; "config ok: {}", config.config_path.display());

    match config.origin() {
        Some(origin) => log!("check"; "origin {origin}"),
        None => log!("check"; "no site url (hover prefetching unavailable)"),
    }

    log!("check"; "critical: {} image(s), {} font(s)",
        config.critical.images.len(), config.critical.fonts.len());
    log!("check"; "routes: {} mapped, {} extra, {}ms delay",
        config.routes.adjacency.len(), config.routes.extra.len(), config.routes.delay);
    log!("check"; "hover {}, instrumentation {}",
        enabled(config.hover.enable), enabled(config.instrument.enable));

    Ok(())
}

fn enabled(flag: bool) -> &'static str {
    if flag { "enabled" } else { "disabled" }
}
