//! Generic markup tree built from a complete response body

/// One element of a parsed feed document.
///
/// Names are stored as written (`arxiv:doi`); lookups compare local names so the
/// namespace prefix chosen by the server does not matter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedNode {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<FeedNode>,
    pub text: String,
}

impl FeedNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Element name without its namespace prefix
    pub fn local_name(&self) -> &str {
        local_part(&self.name)
    }

    /// Whether this element's local name is `local`
    pub fn is(&self, local: &str) -> bool {
        self.local_name() == local
    }

    /// First child with the given local name
    pub fn child(&self, local: &str) -> Option<&FeedNode> {
        self.children.iter().find(|c| c.is(local))
    }

    /// All children with the given local name, in document order
    pub fn children_named<'a>(&'a self, local: &'a str) -> impl Iterator<Item = &'a FeedNode> {
        self.children.iter().filter(move |c| c.is(local))
    }

    /// Attribute value by local name
    pub fn attr(&self, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| local_part(k) == local)
            .map(|(_, v)| v.as_str())
    }

    /// Text content of the first child named `local`
    pub fn child_text(&self, local: &str) -> Option<&str> {
        self.child(local).map(|c| c.text.as_str())
    }
}

fn local_part(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_with_children() -> FeedNode {
        let mut doi = FeedNode::new("arxiv:doi");
        doi.text = "10.1000/xyz".to_string();
        let mut link = FeedNode::new("link");
        link.attributes
            .push(("href".to_string(), "http://example.org".to_string()));
        let mut entry = FeedNode::new("entry");
        entry.children = vec![doi, link.clone(), link];
        entry
    }

    #[test]
    fn test_local_name_strips_prefix() {
        assert_eq!(FeedNode::new("arxiv:primary_category").local_name(), "primary_category");
        assert_eq!(FeedNode::new("entry").local_name(), "entry");
    }

    #[test]
    fn test_child_lookup_by_local_name() {
        let entry = node_with_children();
        assert_eq!(entry.child_text("doi"), Some("10.1000/xyz"));
        assert_eq!(entry.children_named("link").count(), 2);
        assert!(entry.child("title").is_none());
    }

    #[test]
    fn test_attr_lookup() {
        let entry = node_with_children();
        let link = entry.child("link").unwrap();
        assert_eq!(link.attr("href"), Some("http://example.org"));
        assert_eq!(link.attr("rel"), None);
    }
}
