//! arXiv backend
//!
//! API docs: https://info.arxiv.org/help/api/user-manual.html
//! Rate limit: 1 request per 3 seconds

use std::sync::Arc;

use tracing::debug;

use super::{BackendMetadata, CatalogBackend};
use crate::config::ArxivConfig;
use crate::error::{ResolverError, Result};
use crate::feed::parse_feed;
use crate::normalize::normalize_entries;
use crate::record::CanonicalRecord;
use crate::render::CitationRenderer;
use crate::resolver::{AuthoritativeResolver, CitationSink, ResolverDelegate};

#[cfg(feature = "native")]
use crate::http::HttpClient;

/// Search endpoint of the arXiv export API
pub const ARXIV_QUERY_ENDPOINT: &str = "https://export.arxiv.org/api/query";

/// The arXiv search backend
#[derive(Debug, Clone)]
pub struct ArxivBackend {
    delegate: ResolverDelegate,
}

impl ArxivBackend {
    /// Backend whose records with a DOI are resolved through `resolver`
    pub fn new(config: &ArxivConfig, resolver: Arc<dyn AuthoritativeResolver>) -> Self {
        Self::with_renderer(CitationRenderer::new(&config.bibtex), resolver)
    }

    pub fn with_renderer(
        renderer: CitationRenderer,
        resolver: Arc<dyn AuthoritativeResolver>,
    ) -> Self {
        Self {
            delegate: ResolverDelegate::new(renderer, resolver),
        }
    }

    pub fn metadata() -> BackendMetadata {
        BackendMetadata {
            id: "arxiv",
            name: "arXiv",
            description: "Open-access preprint server for physics, math, CS, and more",
            base_url: "https://arxiv.org",
            rate_limit_per_second: 0.33,
        }
    }

    pub fn delegate(&self) -> &ResolverDelegate {
        &self.delegate
    }

    /// Fetch and parse the results for `query`
    #[cfg(feature = "native")]
    pub fn search(
        &self,
        client: &HttpClient,
        query: &str,
    ) -> std::result::Result<Vec<CanonicalRecord>, crate::http::HttpError> {
        let response = client.get(&self.url(query), None)?;
        Ok(self.parse_buffer(&response.body)?)
    }
}

/// Request URL for a query against the arXiv search endpoint
pub fn build_query_url(query: &str) -> String {
    format!(
        "{}?search_query={}",
        ARXIV_QUERY_ENDPOINT,
        urlencoding::encode(query)
    )
}

impl CatalogBackend for ArxivBackend {
    fn name(&self) -> &'static str {
        Self::metadata().name
    }

    fn prompt(&self) -> &'static str {
        "arXiv query: "
    }

    fn url(&self, query: &str) -> String {
        build_query_url(query)
    }

    fn parse_buffer(&self, body: &str) -> Result<Vec<CanonicalRecord>> {
        let entries = parse_feed(body)?;
        let records = normalize_entries(&entries);
        debug!(count = records.len(), "normalized arXiv records");
        Ok(records)
    }

    fn forward_citation(
        &self,
        record: &CanonicalRecord,
        sink: CitationSink,
    ) -> std::result::Result<(), ResolverError> {
        self.delegate.forward(record, sink)
    }
}
