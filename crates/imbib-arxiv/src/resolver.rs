//! Choosing between the authoritative resolver and local rendering
//!
//! A record that carries a cross-reference identifier is handed to the
//! authoritative resolver, which owns formatting and error reporting for it. Any
//! other record is rendered locally. The sink is moved into exactly one of the two
//! paths, so it can be called at most once.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::ResolverError;
use crate::record::CanonicalRecord;
use crate::render::CitationRenderer;

/// Single-use consumer of a finished citation string
pub type CitationSink = Box<dyn FnOnce(String) + Send + 'static>;

/// External source of authoritative citations, keyed by an opaque identifier.
///
/// On success the implementation calls `sink` exactly once. On failure it must not
/// call `sink` and returns its own error.
pub trait AuthoritativeResolver: Send + Sync {
    fn resolve(&self, identifier: &str, sink: CitationSink) -> Result<(), ResolverError>;
}

/// Routes each record to the authoritative resolver or the local renderer
#[derive(Clone)]
pub struct ResolverDelegate {
    renderer: CitationRenderer,
    resolver: Arc<dyn AuthoritativeResolver>,
}

impl ResolverDelegate {
    pub fn new(renderer: CitationRenderer, resolver: Arc<dyn AuthoritativeResolver>) -> Self {
        Self { renderer, resolver }
    }

    pub fn renderer(&self) -> &CitationRenderer {
        &self.renderer
    }

    /// Deliver the citation for `record` to `sink`.
    ///
    /// Errors come only from the authoritative path and are returned as the resolver
    /// produced them.
    pub fn forward(&self, record: &CanonicalRecord, sink: CitationSink) -> Result<(), ResolverError> {
        match record.authoritative_id() {
            Some(identifier) => {
                debug!(identifier, "forwarding to authoritative resolver");
                self.resolver.resolve(identifier, sink)
            }
            None => {
                debug!(id = %record.id, "rendering citation locally");
                sink(self.renderer.render(record));
                Ok(())
            }
        }
    }
}

impl fmt::Debug for ResolverDelegate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverDelegate")
            .field("renderer", &self.renderer)
            .finish_non_exhaustive()
    }
}
