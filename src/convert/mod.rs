//! End-to-end conversion pipeline.
//!
//! One conversion is a single synchronous pass: read the input into
//! memory, parse it into layout nodes, hand the sequence to the rendering
//! engine. Each invocation is independent and stateless beyond its own
//! locals; nothing is shared between conversions.
//!
//! The two historical program variants survive as configuration presets:
//! [`ConvertOptions::plain`] and [`ConvertOptions::report`].

use crate::error::{Error, Result};
use crate::model::Document;
use crate::parser::{self, ParseOptions};
use crate::render::{self, RenderOptions, StyleSheet, TableAlignment};
use std::fs;
use std::path::Path;

/// Options for a full text-to-PDF conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Parsing options
    pub parse: ParseOptions,

    /// Rendering options
    pub render: RenderOptions,
}

impl ConvertOptions {
    /// Create conversion options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// The plain preset: no cover page, no section breaks, bold-only
    /// emphasis, flat subtitle sizing, left-aligned table cells.
    pub fn plain() -> Self {
        Self {
            parse: ParseOptions::new()
                .with_italic(false)
                .with_section_breaks(false),
            render: RenderOptions::new()
                .with_style(StyleSheet::flat())
                .with_cover(false)
                .with_table_alignment(TableAlignment::Left),
        }
    }

    /// The report preset: cover page with date stamp, a page break before
    /// each top-level section, italic emphasis, graded heading sizes,
    /// centered table cells.
    pub fn report() -> Self {
        Self {
            parse: ParseOptions::new()
                .with_italic(true)
                .with_section_breaks(true),
            render: RenderOptions::new()
                .with_style(StyleSheet::graded())
                .with_cover(true)
                .with_table_alignment(TableAlignment::Center),
        }
    }

    /// Set the parsing options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }

    /// Set the rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Set the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.render = self.render.with_title(title);
        self
    }
}

/// Convert a text file to a PDF report.
///
/// A missing input file is the only proactively checked condition; the
/// conversion aborts before any output is produced. Returns the parsed
/// document that was rendered.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &ConvertOptions,
) -> Result<Document> {
    let input = input.as_ref();
    if !input.exists() {
        return Err(Error::InputNotFound(input.to_path_buf()));
    }

    let bytes = fs::read(input)?;
    let text = String::from_utf8(bytes)?;
    convert_str(&text, output, options)
}

/// Convert already-loaded text to a PDF report.
pub fn convert_str<Q: AsRef<Path>>(
    text: &str,
    output: Q,
    options: &ConvertOptions,
) -> Result<Document> {
    let doc = parser::parse_with_options(text, options.parse);
    render::render_to_file(&doc, output, &options.render)?;
    Ok(doc)
}
