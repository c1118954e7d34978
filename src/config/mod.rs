//! Configuration management for `headstart.toml`.
//!
//! # Sections
//!
//! | Section        | Purpose                                            |
//! |----------------|----------------------------------------------------|
//! | `[site]`       | Page origin (hover prefetching refuses to leave it) |
//! | `[critical]`   | Resources preloaded eagerly on every mount          |
//! | `[routes]`     | Prefetch delay, extra candidates, adjacency table   |
//! | `[hover]`      | Hover-intent prefetching toggle                     |
//! | `[instrument]` | Settlement logging toggle                           |

mod error;
mod section;

pub use error::ConfigError;
pub use section::{CriticalConfig, HoverConfig, InstrumentConfig, RoutesConfig, SiteConfig};

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::hint::{CrossOrigin, HintSpec};
use crate::log;

/// Root configuration structure representing headstart.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreloadConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site identity (origin for hover checks)
    #[serde(default)]
    pub site: SiteConfig,

    /// Critical-resource lists
    #[serde(default)]
    pub critical: CriticalConfig,

    /// Route-prefetch settings
    #[serde(default)]
    pub routes: RoutesConfig,

    /// Hover-intent prefetch settings
    #[serde(default)]
    pub hover: HoverConfig,

    /// Settlement instrumentation settings
    #[serde(default)]
    pub instrument: InstrumentConfig,
}

impl PreloadConfig {
    /// Load configuration, searching upward from cwd when `name` is
    /// relative and not present in cwd.
    pub fn load(name: &Path) -> Result<Self, ConfigError> {
        let Some(path) = find_config_file(name) else {
            return Err(ConfigError::NotFound(name.to_path_buf()));
        };

        let mut config = Self::from_path(&path)?;
        config.config_path = path;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from a file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            // No interactive prompt: plan/simulate also run in scripts
            log!("warning"; "unknown fields in {}, ignoring:", path.display());
            for field in &ignored {
                eprintln!("- {field}");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Validate the loaded configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hover.enable && self.site.url.is_none() {
            return Err(ConfigError::Validation(
                "[hover] requires [site] url (the page origin)".to_string(),
            ));
        }

        if let Some(url) = &self.site.url {
            let parsed = Url::parse(url).map_err(|e| {
                ConfigError::Validation(format!("site.url `{url}` is not a valid URL: {e}"))
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::Validation(format!(
                    "site.url `{url}` must be http or https"
                )));
            }
        }

        for raw in self.critical.images.iter().chain(&self.critical.fonts) {
            if raw.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "[critical] entries must be non-empty paths".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// The page origin, when configured.
    pub fn origin(&self) -> Option<Url> {
        self.site.url.as_deref().and_then(|url| Url::parse(url).ok())
    }

    /// Build the fixed critical-resource list as hint specs.
    ///
    /// Validation has already rejected empty entries, so construction
    /// cannot fail here.
    pub fn critical_specs(&self) -> Vec<HintSpec> {
        let images = self
            .critical
            .images
            .iter()
            .filter_map(|raw| HintSpec::image(raw).ok());
        let fonts = self.critical.fonts.iter().filter_map(|raw| {
            HintSpec::font(raw)
                .ok()
                .map(|spec| spec.with_cross_origin(CrossOrigin::Anonymous))
        });
        images.chain(fonts).collect()
    }
}

/// Find config file by searching upward from the current directory.
///
/// Absolute paths are used as-is; relative names are checked in cwd and
/// then in each parent directory until the filesystem root.
fn find_config_file(name: &Path) -> Option<PathBuf> {
    if name.is_absolute() {
        return name.exists().then(|| name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(name);
        if candidate.exists() {
            return Some(candidate);
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

/// Parse a config snippet for section tests.
#[cfg(test)]
pub(crate) fn test_parse_config(content: &str) -> PreloadConfig {
    PreloadConfig::from_str(content).expect("test config should parse")
}
