//! arXiv Atom feed reading

pub mod entry;
pub mod node;
pub mod parser;

pub use entry::{author_affiliation, author_name, RawEntry};
pub use node::FeedNode;
pub use parser::{parse_document, parse_feed, ENTRY_TAG};
