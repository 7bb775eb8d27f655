//! Cite key generation
//!
//! Keys look like `Vaswani2017Attention`: first author's last name, four-digit year,
//! first significant title word.

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref AUTHOR_SEPARATOR: Regex = Regex::new(r"(?i)\s+and\s+").unwrap();
    static ref TRAILING_AFFILIATION: Regex = Regex::new(r"\s*\([^()]*\)\s*$").unwrap();
}

const STOPWORDS: &[&str] = &[
    "a", "an", "the", "on", "in", "of", "for", "to", "and", "with", "by", "from", "as", "at",
    "is", "are", "was", "were", "be", "towards", "toward", "via",
];

/// Generate a cite key from author, year, and title field values
pub fn generate_cite_key(author: Option<&str>, year: Option<&str>, title: Option<&str>) -> String {
    let mut key = String::new();

    if let Some(last_name) = author.and_then(first_author_last_name) {
        key.push_str(&normalize_for_key(&last_name));
    }

    if let Some(year) = year {
        let digits: String = year.chars().filter(|c| c.is_ascii_digit()).take(4).collect();
        if digits.len() == 4 {
            key.push_str(&digits);
        }
    }

    if let Some(word) = title.and_then(first_significant_word) {
        let normalized = normalize_for_key(&word);
        let mut chars = normalized.chars();
        if let Some(first) = chars.next() {
            key.push(first.to_ascii_uppercase());
            key.extend(chars);
        }
    }

    if key.is_empty() {
        key.push_str("Unknown");
    }
    key
}

/// Last name of the first author in an " AND "-joined author field.
///
/// A trailing "(Affiliation)" is ignored; "Last, First" and "First Last" are both handled.
fn first_author_last_name(author: &str) -> Option<String> {
    let first = AUTHOR_SEPARATOR.split(author.trim()).next()?.trim();
    let first = TRAILING_AFFILIATION.replace(first, "");
    let first = first.trim();

    if first.is_empty() {
        return None;
    }

    if let Some((last, _)) = first.split_once(',') {
        return Some(last.trim().to_string());
    }

    first.split_whitespace().last().map(String::from)
}

fn first_significant_word(title: &str) -> Option<String> {
    title
        .split_whitespace()
        .map(|word| word.chars().filter(|c| c.is_alphanumeric()).collect::<String>())
        .filter(|word| !word.is_empty())
        .find(|word| !STOPWORDS.contains(&word.to_lowercase().as_str()))
}

/// Strip diacritics and anything that is not an ASCII letter or digit
fn normalize_for_key(s: &str) -> String {
    s.nfd().filter(|c| c.is_ascii_alphanumeric()).collect()
}
