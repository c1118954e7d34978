//! Hint specification, identity, and handle types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::UrlPath;

use super::intent::Intent;

/// Errors from hint construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HintError {
    #[error("hint target is empty")]
    EmptyTarget,
}

/// CORS mode for the materialized hint, passed through unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrossOrigin {
    Anonymous,
    UseCredentials,
}

impl CrossOrigin {
    /// The `crossorigin` attribute value.
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::UseCredentials => "use-credentials",
        }
    }
}

/// A fully specified resource hint, validated at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HintSpec {
    /// Locator of the hinted resource. Immutable once created.
    pub target: UrlPath,
    pub intent: Intent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_origin: Option<CrossOrigin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl HintSpec {
    /// Build a hint for `raw` with the given intent.
    ///
    /// Navigation targets are normalized as routes; everything else keeps
    /// its asset shape. An empty (or whitespace) target is rejected.
    pub fn new(raw: &str, intent: Intent) -> Result<Self, HintError> {
        if raw.trim().is_empty() {
            return Err(HintError::EmptyTarget);
        }
        let target = if intent.is_speculative() {
            UrlPath::from_route(raw)
        } else {
            UrlPath::from_asset(raw)
        };
        Ok(Self {
            target,
            intent,
            cross_origin: None,
            media: None,
            mime_type: None,
        })
    }

    /// Eager image preload.
    pub fn image(raw: &str) -> Result<Self, HintError> {
        Self::new(raw, Intent::Image)
    }

    /// Eager font preload.
    pub fn font(raw: &str) -> Result<Self, HintError> {
        Self::new(raw, Intent::Font)
    }

    /// Speculative navigation prefetch for a route.
    pub fn navigation(raw: &str) -> Result<Self, HintError> {
        Self::new(raw, Intent::Navigation)
    }

    /// Speculative navigation prefetch for an already-normalized route.
    ///
    /// Infallible: a `UrlPath` is never empty.
    pub fn for_route(route: UrlPath) -> Self {
        Self {
            target: route,
            intent: Intent::Navigation,
            cross_origin: None,
            media: None,
            mime_type: None,
        }
    }

    pub fn with_cross_origin(mut self, mode: CrossOrigin) -> Self {
        self.cross_origin = Some(mode);
        self
    }

    pub fn with_media(mut self, media: impl Into<String>) -> Self {
        self.media = Some(media.into());
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Registry identity of this hint.
    pub fn key(&self) -> HintKey {
        HintKey {
            target: self.target.clone(),
            speculative: self.intent.is_speculative(),
        }
    }
}

/// Registry identity: no two live hints may share a key.
///
/// Two hints are the same hint when they point at the same target and
/// agree on being speculative; the concrete consumption type does not
/// participate in identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HintKey {
    pub target: UrlPath,
    pub speculative: bool,
}

impl HintKey {
    /// Identity of a speculative navigation hint for `route`.
    pub fn speculative(route: &UrlPath) -> Self {
        Self {
            target: route.clone(),
            speculative: true,
        }
    }
}

/// Opaque handle to a live registration.
///
/// Handles stay valid until removed; removing twice, or removing a handle
/// from an already-cleared batch, is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HintHandle {
    pub(super) id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_target_rejected() {
        assert_eq!(HintSpec::image(""), Err(HintError::EmptyTarget));
        assert_eq!(HintSpec::navigation("   "), Err(HintError::EmptyTarget));
    }

    #[test]
    fn test_navigation_normalizes_as_route() {
        let spec = HintSpec::navigation("/about/").unwrap();
        assert_eq!(spec.target, "/about");
        assert!(spec.key().speculative);
    }

    #[test]
    fn test_image_keeps_asset_shape() {
        let spec = HintSpec::image("/assets/hero.avif").unwrap();
        assert_eq!(spec.target, "/assets/hero.avif");
        assert!(!spec.key().speculative);
    }

    #[test]
    fn test_identity_ignores_concrete_intent() {
        let image = HintSpec::image("/assets/shared.css").unwrap();
        let style = HintSpec::new("/assets/shared.css", Intent::Style).unwrap();
        assert_eq!(image.key(), style.key());
    }

    #[test]
    fn test_identity_separates_speculative() {
        let eager = HintSpec::image("/about").unwrap();
        let speculative = HintSpec::navigation("/about").unwrap();
        assert_ne!(eager.key(), speculative.key());
    }

    #[test]
    fn test_builders() {
        let spec = HintSpec::font("/fonts/serif.woff2")
            .unwrap()
            .with_cross_origin(CrossOrigin::Anonymous)
            .with_mime_type("font/woff2");
        assert_eq!(spec.cross_origin, Some(CrossOrigin::Anonymous));
        assert_eq!(spec.mime_type.as_deref(), Some("font/woff2"));
    }
}
