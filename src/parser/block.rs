//! Block parser: source lines to layout nodes.

use super::inline::InlineTransformer;
use super::line::{LineClass, LineClassifier};
use super::options::ParseOptions;
use crate::model::{Document, LayoutNode, ListBlock, TableBlock};

/// Single-pass block parser.
///
/// Scans the document line by line, groups contiguous lines into typed
/// blocks, and emits one layout node per block. Block boundaries are
/// determined purely by adjacency: a blank line or a non-conforming line
/// terminates a table or list run. Lookahead never exceeds "does the next
/// line match this block's continuation pattern".
///
/// Malformed input never raises an error. Unrecognized constructs become
/// paragraphs; under-length table runs and ragged table rows are dropped
/// silently.
pub struct BlockParser {
    classifier: LineClassifier,
    inline: InlineTransformer,
    options: ParseOptions,
}

impl BlockParser {
    /// Create a parser for the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self {
            classifier: LineClassifier::new(),
            inline: InlineTransformer::new(options.enable_italic),
            options,
        }
    }

    /// Parse the full input text into a document.
    pub fn parse(&self, input: &str) -> Document {
        let lines: Vec<&str> = input.lines().collect();
        let mut nodes: Vec<LayoutNode> = Vec::new();
        let mut i = 0;

        while i < lines.len() {
            match self.classifier.classify(lines[i]) {
                LineClass::Blank => {
                    i += 1;
                }
                LineClass::Heading { level, text } => {
                    if level == 1 && self.options.break_before_h1 && !nodes.is_empty() {
                        nodes.push(LayoutNode::PageBreak);
                    }
                    nodes.push(LayoutNode::Heading {
                        level,
                        text: self.inline.transform(text),
                    });
                    i += 1;
                }
                LineClass::TableRow => {
                    let start = i;
                    while i < lines.len() && lines[i].contains('|') {
                        i += 1;
                    }
                    if let Some(table) = self.parse_table(&lines[start..i]) {
                        nodes.push(LayoutNode::Table(table));
                    }
                }
                LineClass::ListItem { ordered, text } => {
                    let mut list = ListBlock::new(ordered);
                    list.push(self.inline.transform(text));
                    i += 1;
                    while i < lines.len() {
                        match self.classifier.split_list_item(lines[i]) {
                            Some((_, text)) => {
                                list.push(self.inline.transform(text));
                                i += 1;
                            }
                            None => break,
                        }
                    }
                    nodes.push(LayoutNode::List(list));
                }
                LineClass::Text => {
                    nodes.push(LayoutNode::Paragraph {
                        text: self.inline.transform(lines[i].trim()),
                    });
                    i += 1;
                }
            }
        }

        Document::from_nodes(nodes)
    }

    /// Build a table from a run of pipe-containing lines.
    ///
    /// The first line is the header, the second a decorative separator
    /// that is always discarded. Returns `None` for runs shorter than two
    /// lines or headers without columns; the run is still consumed.
    fn parse_table(&self, lines: &[&str]) -> Option<TableBlock> {
        if lines.len() < 2 {
            log::debug!("dropping table run of {} line(s)", lines.len());
            return None;
        }

        let headers = split_cells(lines[0]);
        if headers.is_empty() {
            log::debug!("dropping table run with empty header");
            return None;
        }

        let mut table = TableBlock::new(headers);
        for line in &lines[2..] {
            if !table.push_row(split_cells(line)) {
                log::debug!("dropping table row with mismatched cell count: {line:?}");
            }
        }
        Some(table)
    }
}

/// Split a table line on `|`, dropping the outer empty fields produced by
/// leading/trailing separators and trimming each cell.
fn split_cells(line: &str) -> Vec<String> {
    let mut fields: Vec<&str> = line.split('|').collect();
    if fields.first().is_some_and(|f| f.trim().is_empty()) {
        fields.remove(0);
    }
    if fields.last().is_some_and(|f| f.trim().is_empty()) {
        fields.pop();
    }
    fields.into_iter().map(|f| f.trim().to_string()).collect()
}
