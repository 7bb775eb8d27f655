//! imbib-arxiv: arXiv catalog backend for the imbib publication manager
//!
//! This library provides:
//! - Whole-document parsing of arXiv Atom search feeds
//! - Normalization of feed entries into fixed-schema records
//! - BibTeX rendering with cite key generation
//! - DOI-first delegation to an authoritative resolver
//! - A backend trait and registry for multi-source search front ends
//!
//! Transport is optional: enable `native` for a blocking HTTP client and a Crossref
//! DOI resolver, or `cli` for the `imbib-arxiv` binary.

pub mod backend;
pub mod bibtex;
pub mod config;
#[cfg(feature = "native")]
pub mod doi;
pub mod error;
pub mod feed;
#[cfg(feature = "native")]
pub mod http;
pub mod normalize;
pub mod notify;
pub mod record;
pub mod render;
pub mod resolver;

// Re-export main types for convenience
pub use backend::{ArxivBackend, BackendMetadata, BackendRegistry, CatalogBackend};
pub use bibtex::{BibtexCleaner, EntryFormatter, Passthrough};
pub use config::{ArxivConfig, BibtexConfig, ConfigError};
pub use error::{ArxivError, ResolverError, Result};
pub use feed::{FeedNode, RawEntry};
pub use normalize::{extract_identifier, extract_year, format_author, normalize_entry};
pub use notify::{Notifier, TracingNotifier};
pub use record::CanonicalRecord;
pub use render::CitationRenderer;
pub use resolver::{AuthoritativeResolver, CitationSink, ResolverDelegate};

#[cfg(feature = "native")]
pub use doi::DoiResolver;
#[cfg(feature = "native")]
pub use http::{HttpClient, HttpError};

/// Returns the version of imbib-arxiv
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
