//! # mdreport
//!
//! Convert markdown-subset text documents to paginated PDF reports.
//!
//! The input format is a deliberately small slice of markdown: headings,
//! paragraphs, pipe-delimited tables, bullet/numbered lists, and inline
//! bold/italic emphasis. Parsing is liberal and never fails; malformed
//! constructs degrade to paragraphs or are dropped. Page layout and PDF
//! serialization are delegated to the genpdf engine.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdreport::{convert_file, ConvertOptions};
//!
//! fn main() -> mdreport::Result<()> {
//!     // Render report.txt as a titled report with a cover page
//!     convert_file("report.txt", "report.pdf", &ConvertOptions::report())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Line-oriented block parser**: headings, paragraphs, tables, lists
//! - **Inline emphasis**: `**bold**`, `__bold__`, `*italic*`, `_italic_`
//! - **Two presets**: a plain converter and a titled report with cover
//!   page and per-section page breaks
//! - **Liberal parsing**: ragged tables and unmatched markers degrade
//!   instead of erroring
//! - **Inspectable output**: the parsed layout tree serializes to JSON

pub mod convert;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{convert_file, convert_str, ConvertOptions};
pub use error::{Error, Result};
pub use model::{Document, InlineSpan, LayoutNode, ListBlock, TableBlock, TextRun};
pub use parser::{BlockParser, InlineTransformer, ParseOptions};
pub use render::{JsonFormat, RenderOptions, StyleSheet, TableAlignment};

use std::fs;
use std::path::Path;

/// Parse input text into a document with default options.
///
/// Parsing never fails; unrecognized constructs become paragraphs.
///
/// # Example
///
/// ```
/// let doc = mdreport::parse_str("# Title\n\nHello **world**");
/// assert_eq!(doc.node_count(), 2);
/// ```
pub fn parse_str(input: &str) -> Document {
    parser::parse(input)
}

/// Parse input text with custom options.
pub fn parse_str_with_options(input: &str, options: ParseOptions) -> Document {
    parser::parse_with_options(input, options)
}

/// Read a UTF-8 text file and parse it into a document.
///
/// # Example
///
/// ```no_run
/// let doc = mdreport::parse_file("report.txt").unwrap();
/// println!("blocks: {}", doc.node_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    parse_file_with_options(path, ParseOptions::default())
}

/// Read a UTF-8 text file and parse it with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<Document> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes)?;
    Ok(parser::parse_with_options(&text, options))
}

/// Builder for parsing and converting documents.
///
/// # Example
///
/// ```no_run
/// use mdreport::Mdreport;
///
/// Mdreport::report()
///     .with_title("Quarterly Report")
///     .parse_file("report.txt")?
///     .render_to_file("report.pdf")?;
/// # Ok::<(), mdreport::Error>(())
/// ```
pub struct Mdreport {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Mdreport {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Create a builder from the plain preset.
    pub fn plain() -> Self {
        Self::from_options(ConvertOptions::plain())
    }

    /// Create a builder from the report preset.
    pub fn report() -> Self {
        Self::from_options(ConvertOptions::report())
    }

    fn from_options(options: ConvertOptions) -> Self {
        Self {
            parse_options: options.parse,
            render_options: options.render,
        }
    }

    /// Set the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_title(title);
        self
    }

    /// Enable or disable the cover page.
    pub fn with_cover(mut self, insert: bool) -> Self {
        self.render_options = self.render_options.with_cover(insert);
        self
    }

    /// Enable or disable italic emphasis.
    pub fn with_italic(mut self, enable: bool) -> Self {
        self.parse_options = self.parse_options.with_italic(enable);
        self
    }

    /// Enable or disable page breaks before level-1 headings.
    pub fn with_section_breaks(mut self, enable: bool) -> Self {
        self.parse_options = self.parse_options.with_section_breaks(enable);
        self
    }

    /// Set the font directory.
    pub fn with_font_dir(mut self, dir: impl Into<std::path::PathBuf>) -> Self {
        self.render_options = self.render_options.with_font_dir(dir);
        self
    }

    /// Set the table cell alignment.
    pub fn with_table_alignment(mut self, alignment: TableAlignment) -> Self {
        self.render_options = self.render_options.with_table_alignment(alignment);
        self
    }

    /// Parse input text and return a result wrapper.
    pub fn parse(self, input: &str) -> MdreportResult {
        MdreportResult {
            document: parser::parse_with_options(input, self.parse_options),
            render_options: self.render_options,
        }
    }

    /// Read and parse a text file.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<MdreportResult> {
        let document = parse_file_with_options(path, self.parse_options)?;
        Ok(MdreportResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Mdreport {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a document, ready to render.
pub struct MdreportResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl MdreportResult {
    /// Render the document to a PDF file.
    pub fn render_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        render::render_to_file(&self.document, path, &self.render_options)
    }

    /// Serialize the layout tree to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Plain text of the parsed document.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_str_smoke() {
        let doc = parse_str("# Title\n\nHello **world**");
        assert_eq!(doc.node_count(), 2);
        assert!(doc.nodes[0].is_heading());
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file("no/such/file.txt");
        assert!(matches!(result, Err(Error::InputNotFound(_))));
    }

    // ==================== Builder Pattern Tests ====================

    #[test]
    fn test_builder_default() {
        let builder = Mdreport::new();
        assert!(!builder.render_options.insert_cover_page);
        assert!(builder.parse_options.enable_italic);
    }

    #[test]
    fn test_builder_presets() {
        let plain = Mdreport::plain();
        assert!(!plain.parse_options.enable_italic);
        assert!(!plain.render_options.insert_cover_page);

        let report = Mdreport::report();
        assert!(report.parse_options.break_before_h1);
        assert!(report.render_options.insert_cover_page);
    }

    #[test]
    fn test_builder_chained() {
        let builder = Mdreport::report()
            .with_title("Title")
            .with_cover(false)
            .with_italic(false)
            .with_table_alignment(TableAlignment::Left);

        assert_eq!(builder.render_options.title, Some("Title".to_string()));
        assert!(!builder.render_options.insert_cover_page);
        assert!(!builder.parse_options.enable_italic);
    }

    #[test]
    fn test_builder_parse() {
        let result = Mdreport::new().parse("* one\n* two");
        assert_eq!(result.document().node_count(), 1);
        assert_eq!(result.plain_text(), "one\ntwo");
    }

    #[test]
    fn test_result_to_json() {
        let result = Mdreport::new().parse("# T");
        let json = result.to_json(JsonFormat::Compact).unwrap();
        assert!(json.contains("heading"));
    }
}
