//! Entry clean-up: key generation, empty-field removal and layout

use tracing::warn;

use super::cite_key::generate_cite_key;
use super::entry::BibEntry;
use crate::config::BibtexConfig;

/// Key emitted by renderers that leave key generation to the formatter
pub const PLACEHOLDER_KEY: &str = "NO_KEY";

/// Turns raw entry text into its final form.
pub trait EntryFormatter: Send + Sync {
    fn format(&self, raw: &str) -> String;
}

/// Returns raw entries untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl EntryFormatter for Passthrough {
    fn format(&self, raw: &str) -> String {
        raw.to_string()
    }
}

/// Re-emits an entry one field per line with two-space indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibtexCleaner {
    pub autokey: bool,
    pub drop_empty_fields: bool,
    pub align_fields: bool,
}

impl Default for BibtexCleaner {
    fn default() -> Self {
        Self::from(&BibtexConfig::default())
    }
}

impl From<&BibtexConfig> for BibtexCleaner {
    fn from(config: &BibtexConfig) -> Self {
        Self {
            autokey: config.autokey,
            drop_empty_fields: config.drop_empty_fields,
            align_fields: config.align_fields,
        }
    }
}

impl EntryFormatter for BibtexCleaner {
    fn format(&self, raw: &str) -> String {
        let mut entry = match BibEntry::parse(raw) {
            Ok(entry) => entry,
            Err(err) => {
                warn!(%err, "cannot clean BibTeX entry, keeping raw text");
                return raw.to_string();
            }
        };

        if self.drop_empty_fields {
            entry.fields.retain(|f| !f.value.trim().is_empty());
        }

        if self.autokey && entry.cite_key == PLACEHOLDER_KEY {
            entry.cite_key =
                generate_cite_key(entry.field("author"), entry.field("year"), entry.field("title"));
        }

        write_entry(&entry, self.align_fields)
    }
}

fn write_entry(entry: &BibEntry, align: bool) -> String {
    let width = if align {
        entry.fields.iter().map(|f| f.name.len()).max().unwrap_or(0)
    } else {
        0
    };

    let fields: Vec<String> = entry
        .fields
        .iter()
        .map(|f| format!("  {:<width$} = {}", f.name, f.delimited_value(), width = width))
        .collect();

    let mut result = format!("@{}{{{},\n", entry.entry_type, entry.cite_key);
    if !fields.is_empty() {
        result.push_str(&fields.join(",\n"));
        result.push('\n');
    }
    result.push('}');
    result
}
