//! BibTeX entry formatting
//!
//! Renderers emit raw entry text with a placeholder key; an [`EntryFormatter`]
//! turns it into the final entry.

mod cite_key;
mod entry;
mod formatter;

pub use cite_key::generate_cite_key;
pub use entry::{BibEntry, BibField, BibParseError, Delimiter};
pub use formatter::{BibtexCleaner, EntryFormatter, Passthrough, PLACEHOLDER_KEY};
