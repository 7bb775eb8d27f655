//! Record normalization integration tests

mod common;

use common::fixtures::load_response_fixture;
use imbib_arxiv::feed::parse_feed;
use imbib_arxiv::normalize::normalize_entries;
use imbib_arxiv::{extract_identifier, extract_year, CanonicalRecord};
use proptest::prelude::*;
use rstest::rstest;

fn fixture_records() -> Vec<CanonicalRecord> {
    let body = load_response_fixture("arxiv_search.xml");
    normalize_entries(&parse_feed(&body).unwrap())
}

// === Fixture Records ===

#[test]
fn test_preprint_without_doi() {
    let records = fixture_records();
    let record = &records[0];

    assert_eq!(record.id, "http://arxiv.org/abs/1706.03762");
    assert_eq!(record.identifier, "1706.03762");
    assert_eq!(record.title.as_deref(), Some("Attention Is All You Need"));
    assert_eq!(record.authors, vec!["Ashish Vaswani", "Noam Shazeer"]);
    assert_eq!(record.year.as_deref(), Some("2017"));
    assert_eq!(record.container, None);
    assert_eq!(record.category.as_deref(), Some("cs.CL"));
    assert_eq!(record.cross_ref_id, None);
    assert_eq!(record.record_type, "eprint");
    assert_eq!(
        record.url.as_deref(),
        Some("http://arxiv.org/abs/1706.03762v7")
    );
}

#[test]
fn test_published_article_with_doi() {
    let records = fixture_records();
    let record = &records[1];

    assert_eq!(record.identifier, "hep-th/9711200v3");
    assert_eq!(record.authors, vec!["Juan M. Maldacena (Harvard)"]);
    assert_eq!(record.year.as_deref(), Some("1997"));
    assert_eq!(
        record.container.as_deref(),
        Some("Adv.Theor.Math.Phys.2:231-252,1998")
    );
    assert_eq!(record.cross_ref_id.as_deref(), Some("10.1023/A:1026654312961"));
    assert_eq!(record.authoritative_id(), Some("10.1023/A:1026654312961"));
    assert_eq!(
        record.url.as_deref(),
        Some("http://dx.doi.org/10.1023/A:1026654312961")
    );
}

#[test]
fn test_records_serialize_with_fixed_keys() {
    for record in fixture_records() {
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), CanonicalRecord::KEYS.len());
        for key in CanonicalRecord::KEYS {
            assert!(object.contains_key(key), "missing key {}", key);
        }
    }
}

// === Field Extraction ===

#[rstest]
#[case("2017-06-12T17:57:34Z", Some("2017"))]
#[case("2017-06-12T17:57:34", Some("2017"))]
#[case("1997-11-27T16:50:12-05:00", Some("1997"))]
#[case("2024-05-01T00:00:00+01:00", Some("2024"))]
#[case("2017-06-12", None)]
#[case("June 2017", None)]
#[case("17-06-12T17:57:34Z", None)]
#[case("", None)]
fn test_extract_year(#[case] published: &str, #[case] expected: Option<&str>) {
    assert_eq!(extract_year(published).as_deref(), expected);
}

#[rstest]
#[case("http://arxiv.org/abs/1706.03762", "1706.03762")]
#[case("http://arxiv.org/abs/1706.03762v7", "1706.03762v7")]
#[case("http://arxiv.org/abs/hep-th/9711200v3", "hep-th/9711200v3")]
#[case("https://arxiv.org/abs/1706.03762", "https://arxiv.org/abs/1706.03762")]
#[case("1706.03762", "1706.03762")]
#[case("", "")]
fn test_extract_identifier(#[case] id: &str, #[case] expected: &str) {
    assert_eq!(extract_identifier(id), expected);
}

// === Property Tests ===

proptest! {
    #[test]
    fn test_identifier_strips_prefix(suffix in "[a-z0-9./-]{0,24}") {
        let id = format!("http://arxiv.org/abs/{}", suffix);
        prop_assert_eq!(extract_identifier(&id), suffix);
    }

    #[test]
    fn test_normalize_never_fails(
        title in "[a-zA-Z0-9 .,:-]{0,40}",
        name in "[a-zA-Z .-]{0,20}",
        published in "[0-9TZ:-]{0,24}",
    ) {
        let body = format!(
            "<feed><entry><id>http://arxiv.org/abs/0000.0000</id><title>{}</title>\
             <author><name>{}</name></author><published>{}</published></entry></feed>",
            title, name, published
        );
        let records = normalize_entries(&parse_feed(&body).unwrap());

        prop_assert_eq!(records.len(), 1);
        let record = &records[0];
        prop_assert_eq!(record.identifier.as_str(), "0000.0000");
        prop_assert!(record.authors.iter().all(|a| !a.is_empty()));
        prop_assert_eq!(record.year.clone(), extract_year(&published));

        let value = serde_json::to_value(record).unwrap();
        prop_assert_eq!(value.as_object().unwrap().len(), 10);
    }
}
