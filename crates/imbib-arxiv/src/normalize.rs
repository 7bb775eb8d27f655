//! Mapping raw Atom entries to canonical records
//!
//! Normalization never fails. A missing sub-field yields an empty value for its key.

use lazy_static::lazy_static;
use regex::Regex;

use crate::feed::{author_affiliation, author_name, FeedNode, RawEntry};
use crate::record::{CanonicalRecord, RECORD_TYPE};

/// Prefix of the `<id>` URLs the arXiv API emits
pub const ABSTRACT_URL_PREFIX: &str = "http://arxiv.org/abs/";

lazy_static! {
    static ref PUBLISHED_DATE: Regex =
        Regex::new(r"^(\d{4})-(\d{2})-(\d{2})T(\d{2}):(\d{2}):(\d{2})(Z|[+-]\d{2}:\d{2})?$")
            .unwrap();
}

/// Short catalog id from an abstract-page URL.
///
/// Strings without the URL prefix pass through unchanged.
pub fn extract_identifier(id: &str) -> String {
    id.strip_prefix(ABSTRACT_URL_PREFIX).unwrap_or(id).to_string()
}

/// Four-digit year of a `YYYY-MM-DDThh:mm:ss[offset]` timestamp.
///
/// The whole string must match; anything else has no year.
pub fn extract_year(published: &str) -> Option<String> {
    PUBLISHED_DATE
        .captures(published)
        .and_then(|caps| caps.get(1))
        .map(|year| year.as_str().to_string())
}

/// Format an `<author>` child as "Name (Affiliation)".
///
/// Returns `None` for children that are not authors, and for authors with neither
/// a name nor an affiliation, so they leave no blank slot in the author list.
pub fn format_author(node: &FeedNode) -> Option<String> {
    if !node.is("author") {
        return None;
    }

    let name = author_name(node).map(str::trim).filter(|n| !n.is_empty());
    let affiliation = author_affiliation(node).map(|a| format!("({})", a));

    match (name, affiliation) {
        (Some(name), Some(affiliation)) => Some(format!("{} {}", name, affiliation)),
        (Some(name), None) => Some(name.to_string()),
        (None, affiliation) => affiliation,
    }
}

/// Build the canonical record for one feed entry.
pub fn normalize_entry(entry: &RawEntry) -> CanonicalRecord {
    let id = entry.id().unwrap_or_default().to_string();

    CanonicalRecord {
        identifier: extract_identifier(&id),
        id,
        title: entry.title().map(String::from),
        authors: entry.children().iter().filter_map(format_author).collect(),
        year: entry.published().and_then(extract_year),
        container: entry.journal_ref().map(String::from),
        category: entry.primary_category().map(String::from),
        cross_ref_id: entry.doi().map(String::from),
        record_type: RECORD_TYPE.to_string(),
        url: entry.first_link_href().map(String::from),
    }
}

/// Normalize every entry, keeping feed order.
pub fn normalize_entries(entries: &[RawEntry]) -> Vec<CanonicalRecord> {
    entries.iter().map(normalize_entry).collect()
}
