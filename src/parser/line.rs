//! Line classification.

use regex::Regex;

/// Classification of a single source line, after trimming.
///
/// Classification order is fixed: blank, heading, table row, list item,
/// text. A heading line containing `|` is still a heading; a list-looking
/// line containing `|` opens (or continues) a table run instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty after trimming; separates blocks, emits nothing
    Blank,

    /// 1-6 leading `#` markers, whitespace, then text
    Heading {
        /// Count of `#` markers
        level: u8,
        /// Text after the markers
        text: &'a str,
    },

    /// Contains the `|` column separator
    TableRow,

    /// Bullet (`*`/`-`) or numbered (`1.`) marker, whitespace, then text
    ListItem {
        /// True for numbered markers
        ordered: bool,
        /// Text after the marker
        text: &'a str,
    },

    /// Anything else; becomes a paragraph
    Text,
}

/// Classifies lines using precompiled patterns.
pub(crate) struct LineClassifier {
    heading: Regex,
    list_item: Regex,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self {
            // Seven or more markers do not match and fall through to text.
            heading: Regex::new(r"^(#{1,6})\s+(.*)").unwrap(),
            list_item: Regex::new(r"^(\*|-|\d+\.)\s+(.*)").unwrap(),
        }
    }

    /// Classify one line for block dispatch.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineClass::Blank;
        }
        if let Some(caps) = self.heading.captures(trimmed) {
            return LineClass::Heading {
                level: caps.get(1).unwrap().as_str().len() as u8,
                text: caps.get(2).unwrap().as_str(),
            };
        }
        if trimmed.contains('|') {
            return LineClass::TableRow;
        }
        if let Some((ordered, text)) = self.split_list_item(trimmed) {
            return LineClass::ListItem { ordered, text };
        }
        LineClass::Text
    }

    /// Match a line against the list-item pattern alone.
    ///
    /// This is the list run's continuation check: inside a run the table
    /// precedence does not apply, so a marker line containing `|` still
    /// extends the list.
    pub fn split_list_item<'a>(&self, line: &'a str) -> Option<(bool, &'a str)> {
        let trimmed = line.trim();
        self.list_item.captures(trimmed).map(|caps| {
            let marker = caps.get(1).unwrap().as_str();
            (marker.ends_with('.'), caps.get(2).unwrap().as_str())
        })
    }
}
