//! Catalog backends and the registry that holds them

pub mod arxiv;
pub mod registry;

pub use arxiv::{ArxivBackend, ARXIV_QUERY_ENDPOINT};
pub use registry::BackendRegistry;

use std::sync::Arc;

use crate::error::{ResolverError, Result};
use crate::record::CanonicalRecord;
use crate::resolver::CitationSink;

/// Metadata about a backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackendMetadata {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub base_url: &'static str,
    pub rate_limit_per_second: f32,
}

/// Uniform command surface a registry dispatches to
pub trait CatalogBackend: Send + Sync {
    /// Display name
    fn name(&self) -> &'static str;

    /// Prompt shown when asking the user for a query
    fn prompt(&self) -> &'static str;

    /// Full request URL for a user query
    fn url(&self, query: &str) -> String;

    /// Parse a complete response body into records, in result order
    fn parse_buffer(&self, body: &str) -> Result<Vec<CanonicalRecord>>;

    /// Deliver the citation for one record to `sink`
    fn forward_citation(
        &self,
        record: &CanonicalRecord,
        sink: CitationSink,
    ) -> std::result::Result<(), ResolverError>;

    /// Add this backend to `registry`; repeated calls leave a single entry
    fn register(self: Arc<Self>, registry: &mut BackendRegistry) -> bool
    where
        Self: Sized + 'static,
    {
        registry.add(self)
    }
}
