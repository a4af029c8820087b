//! Layout node types.

use super::{InlineSpan, TableBlock};
use serde::{Deserialize, Serialize};

/// A renderer-ready representation of one document block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayoutNode {
    /// A heading with its level (1-6)
    Heading {
        /// Count of leading `#` markers
        level: u8,
        /// Heading text with emphasis resolved
        text: InlineSpan,
    },

    /// A paragraph of flowing text
    Paragraph {
        /// Paragraph text with emphasis resolved
        text: InlineSpan,
    },

    /// A bullet or numbered list
    List(ListBlock),

    /// A pipe-delimited table
    Table(TableBlock),

    /// A structural page break, no content
    PageBreak,
}

impl LayoutNode {
    /// Create a heading node.
    pub fn heading(level: u8, text: impl Into<InlineSpan>) -> Self {
        LayoutNode::Heading {
            level,
            text: text.into(),
        }
    }

    /// Create a paragraph node.
    pub fn paragraph(text: impl Into<InlineSpan>) -> Self {
        LayoutNode::Paragraph { text: text.into() }
    }

    /// Check if this node is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, LayoutNode::Heading { .. })
    }

    /// Check if this node is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, LayoutNode::Table(_))
    }

    /// Check if this node is a page break.
    pub fn is_page_break(&self) -> bool {
        matches!(self, LayoutNode::PageBreak)
    }

    /// Plain text content of the node, empty for page breaks.
    pub fn plain_text(&self) -> String {
        match self {
            LayoutNode::Heading { text, .. } => text.plain_text(),
            LayoutNode::Paragraph { text } => text.plain_text(),
            LayoutNode::List(list) => list.plain_text(),
            LayoutNode::Table(table) => table.plain_text(),
            LayoutNode::PageBreak => String::new(),
        }
    }
}

/// An ordered or unordered list built from a run of marker lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBlock {
    /// True for `1.`-style lists, false for `*`/`-` bullets.
    ///
    /// Fixed by the first line of the run; later lines keep the type
    /// even when they use a different marker style.
    pub ordered: bool,

    /// One entry per source line in the run
    pub items: Vec<InlineSpan>,
}

impl ListBlock {
    /// Create an empty list of the given kind.
    pub fn new(ordered: bool) -> Self {
        Self {
            ordered,
            items: Vec::new(),
        }
    }

    /// Append an item.
    pub fn push(&mut self, item: impl Into<InlineSpan>) {
        self.items.push(item.into());
    }

    /// Number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Newline-separated plain text of all items.
    pub fn plain_text(&self) -> String {
        self.items
            .iter()
            .map(|item| item.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
