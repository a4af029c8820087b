//! Rendering options.

use super::style::StyleSheet;
use std::path::PathBuf;

/// Options for rendering a parsed document to PDF.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Visual configuration
    pub style: StyleSheet,

    /// Prepend a cover page with the report title and a date stamp
    pub insert_cover_page: bool,

    /// Report title; falls back to the document's first level-1 heading
    pub title: Option<String>,

    /// Stamp the cover page with the current date
    pub stamp_date: bool,

    /// Horizontal alignment of table cell text
    pub table_alignment: TableAlignment,
}

impl RenderOptions {
    /// Create render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style sheet.
    pub fn with_style(mut self, style: StyleSheet) -> Self {
        self.style = style;
        self
    }

    /// Enable or disable the cover page.
    pub fn with_cover(mut self, insert: bool) -> Self {
        self.insert_cover_page = insert;
        self
    }

    /// Set the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable the cover date stamp.
    pub fn with_date_stamp(mut self, stamp: bool) -> Self {
        self.stamp_date = stamp;
        self
    }

    /// Set the table cell alignment.
    pub fn with_table_alignment(mut self, alignment: TableAlignment) -> Self {
        self.table_alignment = alignment;
        self
    }

    /// Set the font directory on the style sheet.
    pub fn with_font_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.style.font_dir = dir.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            style: StyleSheet::default(),
            insert_cover_page: false,
            title: None,
            stamp_date: true,
            table_alignment: TableAlignment::Left,
        }
    }
}

/// Horizontal alignment for table cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableAlignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
}
