//! In-memory document head.
//!
//! Materializes hints as `<link>` elements the way a browser head would
//! hold them: insertion-ordered, removable by handle. `render()` is what
//! the CLI prints so a reader sees exactly the head a page would carry.

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::utils::html::escape_attr;

use super::sink::HintSink;
use super::types::{HintHandle, HintSpec};

/// Insertion-ordered model of head-level resource hints.
#[derive(Default)]
pub struct DocumentHead {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    /// Handle id → rendered element
    links: FxHashMap<u64, String>,
    /// Insertion order of handle ids
    order: Vec<u64>,
}

impl DocumentHead {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live `<link>` elements.
    pub fn len(&self) -> usize {
        self.inner.lock().links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().links.is_empty()
    }

    /// Render the head contents, one element per line, insertion order.
    pub fn render(&self) -> String {
        let inner = self.inner.lock();
        let mut out = String::new();
        for id in &inner.order {
            if let Some(tag) = inner.links.get(id) {
                out.push_str(tag);
                out.push('\n');
            }
        }
        out
    }
}

/// Render a hint as a head-level `<link>` element.
fn link_tag(spec: &HintSpec) -> String {
    let mut tag = format!("<link rel=\"{}\"", spec.intent.rel());

    if let Some(as_attr) = spec.intent.as_attr() {
        tag.push_str(&format!(" as=\"{as_attr}\""));
    }

    tag.push_str(&format!(
        " href=\"{}\"",
        escape_attr(&spec.target.to_encoded())
    ));

    if let Some(mode) = spec.cross_origin {
        tag.push_str(&format!(" crossorigin=\"{}\"", mode.as_attr()));
    }
    if let Some(media) = &spec.media {
        tag.push_str(&format!(" media=\"{}\"", escape_attr(media)));
    }
    if let Some(mime) = &spec.mime_type {
        tag.push_str(&format!(" type=\"{}\"", escape_attr(mime)));
    }

    tag.push('>');
    tag
}

impl HintSink for DocumentHead {
    fn attach(&self, handle: HintHandle, spec: &HintSpec) {
        let tag = link_tag(spec);
        let mut inner = self.inner.lock();
        inner.links.insert(handle.id, tag);
        inner.order.push(handle.id);
    }

    fn detach(&self, handle: HintHandle) {
        let mut inner = self.inner.lock();
        inner.links.remove(&handle.id);
        inner.order.retain(|id| *id != handle.id);
    }
}
