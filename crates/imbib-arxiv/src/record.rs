//! Normalized search result

use serde::{Deserialize, Serialize};

/// Provenance tag carried by every record from this backend
pub const RECORD_TYPE: &str = "eprint";

/// One normalized arXiv search result.
///
/// All ten keys are always present; missing feed fields become `None`, an empty
/// string or an empty author list. Serialized absent values are `null`, never omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    /// Raw feed identifier (the abstract-page URL)
    pub id: String,
    /// Short catalog id, e.g. `1706.03762`
    pub identifier: String,
    pub title: Option<String>,
    /// "Name (Affiliation)" strings in feed order
    pub authors: Vec<String>,
    pub year: Option<String>,
    /// Journal reference
    pub container: Option<String>,
    /// Primary category, e.g. `cs.CL`
    pub category: Option<String>,
    /// DOI of the published version
    pub cross_ref_id: Option<String>,
    #[serde(rename = "type")]
    pub record_type: String,
    pub url: Option<String>,
}

impl CanonicalRecord {
    /// Key names in schema order
    pub const KEYS: [&'static str; 10] = [
        "id",
        "identifier",
        "title",
        "authors",
        "year",
        "container",
        "category",
        "cross_ref_id",
        "type",
        "url",
    ];

    /// Cross-reference identifier, if it is present and non-empty
    pub fn authoritative_id(&self) -> Option<&str> {
        self.cross_ref_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cross_ref_id: Option<&str>) -> CanonicalRecord {
        CanonicalRecord {
            id: "http://arxiv.org/abs/1234.5678".to_string(),
            identifier: "1234.5678".to_string(),
            title: None,
            authors: Vec::new(),
            year: None,
            container: None,
            category: None,
            cross_ref_id: cross_ref_id.map(String::from),
            record_type: RECORD_TYPE.to_string(),
            url: None,
        }
    }

    #[test]
    fn test_serialized_keys_match_schema() {
        let value = serde_json::to_value(record(None)).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), CanonicalRecord::KEYS.len());
        for key in CanonicalRecord::KEYS {
            assert!(object.contains_key(key), "missing key {}", key);
        }
        assert_eq!(object["type"], "eprint");
        assert!(object["year"].is_null());
    }

    #[test]
    fn test_authoritative_id() {
        assert_eq!(record(None).authoritative_id(), None);
        assert_eq!(record(Some("")).authoritative_id(), None);
        assert_eq!(record(Some("  ")).authoritative_id(), None);
        assert_eq!(
            record(Some("10.1000/xyz")).authoritative_id(),
            Some("10.1000/xyz")
        );
    }
}
