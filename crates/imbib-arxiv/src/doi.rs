//! DOI resolution through the Crossref BibTeX transform
//!
//! API docs: https://api.crossref.org/swagger-ui/index.html

use std::sync::Arc;

use tracing::{debug, info};

use crate::bibtex::{BibtexCleaner, EntryFormatter};
use crate::config::BibtexConfig;
use crate::error::ResolverError;
use crate::http::HttpClient;
use crate::resolver::{AuthoritativeResolver, CitationSink};

pub const CROSSREF_WORKS_ENDPOINT: &str = "https://api.crossref.org/works";

/// Transform URL returning the BibTeX record registered for `doi`
pub fn bibtex_transform_url(doi: &str) -> String {
    format!(
        "{}/{}/transform/application/x-bibtex",
        CROSSREF_WORKS_ENDPOINT,
        urlencoding::encode(normalize_doi(doi))
    )
}

/// Strip resolver URL and `doi:` prefixes
pub fn normalize_doi(doi: &str) -> &str {
    let doi = doi.trim();
    ["https://doi.org/", "http://doi.org/", "https://dx.doi.org/", "http://dx.doi.org/", "doi:"]
        .iter()
        .find_map(|prefix| doi.strip_prefix(prefix))
        .unwrap_or(doi)
}

/// Resolves DOIs to publisher-registered BibTeX
pub struct DoiResolver {
    client: HttpClient,
    formatter: Arc<dyn EntryFormatter>,
}

impl DoiResolver {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            formatter: Arc::new(BibtexCleaner::default()),
        }
    }

    /// Resolver whose entries are cleaned with the same options as local renders
    pub fn from_config(client: HttpClient, config: &BibtexConfig) -> Self {
        Self::new(client).with_formatter(BibtexCleaner::from(config))
    }

    /// Replace the formatter applied to the returned entry
    pub fn with_formatter(mut self, formatter: impl EntryFormatter + 'static) -> Self {
        self.formatter = Arc::new(formatter);
        self
    }
}

impl AuthoritativeResolver for DoiResolver {
    fn resolve(&self, identifier: &str, sink: CitationSink) -> Result<(), ResolverError> {
        let url = bibtex_transform_url(identifier);
        info!(doi = identifier, "fetching BibTeX from Crossref");
        let response = self.client.get(&url, Some("application/x-bibtex"))?;

        let body = response.body.trim();
        if body.is_empty() {
            return Err(format!("Crossref returned an empty record for {}", identifier).into());
        }

        debug!(bytes = body.len(), "received Crossref BibTeX");
        sink(self.formatter.format(body));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_doi() {
        assert_eq!(normalize_doi("https://doi.org/10.1038/nature12373"), "10.1038/nature12373");
        assert_eq!(normalize_doi("doi:10.1038/nature12373"), "10.1038/nature12373");
        assert_eq!(normalize_doi(" 10.1038/nature12373 "), "10.1038/nature12373");
    }

    #[test]
    fn test_from_config_applies_formatting_options() {
        let client = HttpClient::new(crate::http::DEFAULT_USER_AGENT).unwrap();
        let config = BibtexConfig {
            align_fields: true,
            drop_empty_fields: false,
            ..Default::default()
        };
        let resolver = DoiResolver::from_config(client, &config);

        assert_eq!(
            resolver
                .formatter
                .format("@article{Doe2020, title = {T}, journal = {J}, note = {}}"),
            "@article{Doe2020,\n  title   = {T},\n  journal = {J},\n  note    = {}\n}"
        );
    }

    #[test]
    fn test_bibtex_transform_url() {
        assert_eq!(
            bibtex_transform_url("10.1038/nature12373"),
            "https://api.crossref.org/works/10.1038%2Fnature12373/transform/application/x-bibtex"
        );
    }
}
