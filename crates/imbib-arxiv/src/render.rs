//! Local BibTeX rendering for records without an authoritative source

use std::fmt;
use std::sync::Arc;

use crate::bibtex::{BibtexCleaner, EntryFormatter, PLACEHOLDER_KEY};
use crate::config::BibtexConfig;
use crate::notify::{Notifier, TracingNotifier};
use crate::record::CanonicalRecord;

/// Value of the `archivePrefix` field
pub const ARCHIVE_PREFIX: &str = "arXiv";

/// Separator between names in the `author` field
pub const AUTHOR_SEPARATOR: &str = " AND ";

/// Escape every brace that has no partner so `text` nests inside a `{...}` group.
///
/// Balanced groups and existing `\{`, `\}` escapes are kept as written. A trailing lone
/// backslash is doubled so it cannot escape the closing delimiter.
pub fn escape_unbalanced_braces(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut unmatched = vec![false; chars.len()];
    let mut open = Vec::new();
    let mut escaped = false;

    for (i, &c) in chars.iter().enumerate() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '{' => open.push(i),
            '}' => {
                if open.pop().is_none() {
                    unmatched[i] = true;
                }
            }
            _ => {}
        }
    }
    for i in open {
        unmatched[i] = true;
    }

    let mut out = String::with_capacity(text.len() + 2);
    for (c, unmatched) in chars.into_iter().zip(unmatched) {
        if unmatched {
            out.push('\\');
        }
        out.push(c);
    }
    if escaped {
        out.push('\\');
    }
    out
}

/// Raw entry text before formatting: placeholder key, one field per line.
///
/// Absent values render as empty groups. Values are brace-escaped so the entry stays
/// balanced whatever the feed contained.
pub fn build_raw_entry(record: &CanonicalRecord, entry_type: &str) -> String {
    format!(
        "@{}{{{},\nauthor = {{{}}},\ntitle = {{{{{}}}}},\nyear = {{{}}},\narchivePrefix = {{{}}},\neprint = {{{}}},\nprimaryClass = {{{}}}}}",
        entry_type,
        PLACEHOLDER_KEY,
        escape_unbalanced_braces(&record.authors.join(AUTHOR_SEPARATOR)),
        escape_unbalanced_braces(record.title.as_deref().unwrap_or_default()),
        escape_unbalanced_braces(record.year.as_deref().unwrap_or_default()),
        ARCHIVE_PREFIX,
        escape_unbalanced_braces(&record.identifier),
        escape_unbalanced_braces(record.category.as_deref().unwrap_or_default()),
    )
}

/// Renders canonical records as BibTeX entries.
///
/// Output depends only on the record and the configuration the renderer was
/// built with.
#[derive(Clone)]
pub struct CitationRenderer {
    entry_type: String,
    formatter: Arc<dyn EntryFormatter>,
    notifier: Arc<dyn Notifier>,
}

impl CitationRenderer {
    pub fn new(config: &BibtexConfig) -> Self {
        Self {
            entry_type: config.entry_type.clone(),
            formatter: Arc::new(BibtexCleaner::from(config)),
            notifier: Arc::new(TracingNotifier),
        }
    }

    /// Replace the formatter applied to the raw entry text
    pub fn with_formatter(mut self, formatter: impl EntryFormatter + 'static) -> Self {
        self.formatter = Arc::new(formatter);
        self
    }

    /// Replace the notifier that announces each render
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }

    pub fn entry_type(&self) -> &str {
        &self.entry_type
    }

    pub fn render(&self, record: &CanonicalRecord) -> String {
        self.notifier
            .notify(&format!("Auto-generating a BibTeX entry for {}.", record.id));
        let raw = build_raw_entry(record, &self.entry_type);
        self.formatter.format(&raw)
    }
}

impl Default for CitationRenderer {
    fn default() -> Self {
        Self::new(&BibtexConfig::default())
    }
}

impl fmt::Debug for CitationRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CitationRenderer")
            .field("entry_type", &self.entry_type)
            .finish_non_exhaustive()
    }
}
