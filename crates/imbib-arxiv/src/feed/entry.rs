//! Typed access to one Atom entry
//!
//! Every accessor walks a fixed sub-field path and returns `None` when any step of
//! the path is missing.

use super::node::FeedNode;

/// One `<entry>` element of an arXiv Atom feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    node: FeedNode,
}

impl RawEntry {
    pub fn new(node: FeedNode) -> Self {
        Self { node }
    }

    /// The underlying element
    pub fn node(&self) -> &FeedNode {
        &self.node
    }

    /// All child elements, authors and non-authors alike, in document order
    pub fn children(&self) -> &[FeedNode] {
        &self.node.children
    }

    /// `<id>`: abstract-page URL
    pub fn id(&self) -> Option<&str> {
        self.node.child_text("id")
    }

    /// `<title>`
    pub fn title(&self) -> Option<&str> {
        self.node.child_text("title")
    }

    /// `<published>`: ISO-8601 timestamp
    pub fn published(&self) -> Option<&str> {
        self.node.child_text("published")
    }

    /// `<arxiv:doi>`
    pub fn doi(&self) -> Option<&str> {
        self.node.child_text("doi")
    }

    /// `<arxiv:journal_ref>`
    pub fn journal_ref(&self) -> Option<&str> {
        self.node.child_text("journal_ref")
    }

    /// `term` attribute of `<arxiv:primary_category>`
    pub fn primary_category(&self) -> Option<&str> {
        self.node
            .child("primary_category")
            .and_then(|c| c.attr("term"))
    }

    /// `href` attribute of the first `<link>`
    pub fn first_link_href(&self) -> Option<&str> {
        self.node.child("link").and_then(|l| l.attr("href"))
    }
}

/// `<name>` of an `<author>` element
pub fn author_name(author: &FeedNode) -> Option<&str> {
    author.child_text("name")
}

/// First non-empty `<arxiv:affiliation>` of an `<author>` element
pub fn author_affiliation(author: &FeedNode) -> Option<&str> {
    author
        .children_named("affiliation")
        .map(|a| a.text.trim())
        .find(|a| !a.is_empty())
}
