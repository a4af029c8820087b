//! Document-level types.

use super::{InlineSpan, LayoutNode};
use serde::{Deserialize, Serialize};

/// The ordered sequence of layout nodes produced by one parse.
///
/// A document is transient: it is produced by the parser, consumed by the
/// renderer, and discarded after one conversion. Nothing persists between
/// conversions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Layout nodes in source order
    pub nodes: Vec<LayoutNode>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create a document from a node sequence.
    pub fn from_nodes(nodes: Vec<LayoutNode>) -> Self {
        Self { nodes }
    }

    /// Append a node.
    pub fn push(&mut self, node: LayoutNode) {
        self.nodes.push(node);
    }

    /// Number of layout nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the document has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over the nodes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, LayoutNode> {
        self.nodes.iter()
    }

    /// All headings in order, as (level, text) pairs.
    pub fn headings(&self) -> Vec<(u8, &InlineSpan)> {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                LayoutNode::Heading { level, text } => Some((*level, text)),
                _ => None,
            })
            .collect()
    }

    /// The first level-1 heading, if any.
    ///
    /// Used as the default report title when none is configured.
    pub fn title(&self) -> Option<String> {
        self.headings()
            .iter()
            .find(|(level, _)| *level == 1)
            .map(|(_, text)| text.plain_text())
    }

    /// Plain text of all content nodes, blocks separated by blank lines.
    pub fn plain_text(&self) -> String {
        self.nodes
            .iter()
            .filter(|node| !node.is_page_break())
            .map(|node| node.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a LayoutNode;
    type IntoIter = std::slice::Iter<'a, LayoutNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_push() {
        let mut doc = Document::new();
        assert!(doc.is_empty());

        doc.push(LayoutNode::heading(1, "Title"));
        doc.push(LayoutNode::paragraph("body"));
        assert_eq!(doc.node_count(), 2);
    }

    #[test]
    fn test_headings() {
        let doc = Document::from_nodes(vec![
            LayoutNode::heading(1, "Title"),
            LayoutNode::paragraph("text"),
            LayoutNode::heading(2, "Section"),
        ]);

        let headings = doc.headings();
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0].0, 1);
        assert_eq!(headings[1].0, 2);
    }

    #[test]
    fn test_title_from_first_h1() {
        let doc = Document::from_nodes(vec![
            LayoutNode::heading(2, "Preface"),
            LayoutNode::heading(1, "Annual Report"),
        ]);
        assert_eq!(doc.title(), Some("Annual Report".to_string()));

        let untitled = Document::from_nodes(vec![LayoutNode::paragraph("x")]);
        assert_eq!(untitled.title(), None);
    }

    #[test]
    fn test_plain_text_skips_page_breaks() {
        let doc = Document::from_nodes(vec![
            LayoutNode::paragraph("one"),
            LayoutNode::PageBreak,
            LayoutNode::paragraph("two"),
        ]);
        assert_eq!(doc.plain_text(), "one\n\ntwo");
    }
}
