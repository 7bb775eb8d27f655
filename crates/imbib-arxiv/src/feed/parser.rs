//! Whole-document Atom feed parsing
//!
//! The body is read into a [`FeedNode`] tree in one pass and only then split into
//! entries, so entry order and grouping match the document exactly. Any markup error
//! fails the whole parse; callers never see a partial entry list.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use super::entry::RawEntry;
use super::node::FeedNode;
use crate::error::{ArxivError, Result};

/// Local name of the elements that carry one search result
pub const ENTRY_TAG: &str = "entry";

/// Parse a complete feed body into its root element.
pub fn parse_document(body: &str) -> Result<FeedNode> {
    let mut reader = Reader::from_str(body);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut stack: Vec<FeedNode> = Vec::new();
    let mut root: Option<FeedNode> = None;

    loop {
        let event = reader.read_event_into(&mut buf).map_err(|e| {
            ArxivError::malformed(format!(
                "XML parse error at byte {}: {}",
                reader.buffer_position(),
                e
            ))
        })?;

        match event {
            Event::Start(ref e) => stack.push(open_element(e)?),
            Event::Empty(ref e) => {
                let node = open_element(e)?;
                close_element(&mut stack, &mut root, node)?;
            }
            Event::End(_) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| ArxivError::malformed("closing tag without an open element"))?;
                close_element(&mut stack, &mut root, node)?;
            }
            Event::Text(e) => {
                let text = e
                    .unescape()
                    .map_err(|e| ArxivError::malformed(format!("invalid text content: {}", e)))?;
                append_text(&mut stack, &text)?;
            }
            Event::CData(e) => {
                let raw = e.into_inner();
                append_text(&mut stack, &String::from_utf8_lossy(&raw))?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctype
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(ArxivError::malformed(format!(
            "unclosed element <{}>",
            open.name
        )));
    }

    root.ok_or_else(|| ArxivError::malformed("document has no root element"))
}

/// Parse a feed body and keep only its entry elements, in document order.
///
/// Feed-level metadata, links and pagination siblings are discarded.
pub fn parse_feed(body: &str) -> Result<Vec<RawEntry>> {
    let root = parse_document(body)?;

    let entries: Vec<RawEntry> = if root.is(ENTRY_TAG) {
        vec![RawEntry::new(root)]
    } else {
        root.children
            .into_iter()
            .filter(|node| node.is(ENTRY_TAG))
            .map(RawEntry::new)
            .collect()
    };

    debug!(count = entries.len(), "parsed feed entries");
    Ok(entries)
}

fn open_element(e: &BytesStart<'_>) -> Result<FeedNode> {
    let mut node = FeedNode::new(String::from_utf8_lossy(e.name().as_ref()));

    for attr in e.attributes() {
        let attr =
            attr.map_err(|err| ArxivError::malformed(format!("invalid attribute: {}", err)))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| ArxivError::malformed(format!("invalid attribute value: {}", err)))?
            .into_owned();
        node.attributes.push((key, value));
    }

    Ok(node)
}

fn close_element(
    stack: &mut [FeedNode],
    root: &mut Option<FeedNode>,
    node: FeedNode,
) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    } else if root.is_some() {
        return Err(ArxivError::malformed(format!(
            "second root element <{}>",
            node.name
        )));
    } else {
        *root = Some(node);
    }
    Ok(())
}

fn append_text(stack: &mut [FeedNode], text: &str) -> Result<()> {
    match stack.last_mut() {
        Some(node) => node.text.push_str(text),
        None if text.trim().is_empty() => {}
        None => return Err(ArxivError::malformed("text outside the root element")),
    }
    Ok(())
}
