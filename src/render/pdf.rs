//! PDF assembly over the genpdf layout engine.
//!
//! The engine owns page flow: it wraps paragraphs, splits tables across
//! pages, and honors explicit page breaks. This module maps each layout
//! node onto one engine element and lets the engine do the rest.

use super::options::{RenderOptions, TableAlignment};
use super::style::StyleSheet;
use crate::error::{Error, Result};
use crate::model::{Document, InlineSpan, LayoutNode, ListBlock, TableBlock};

use genpdf::elements::{
    Break, FrameCellDecorator, OrderedList, PageBreak, Paragraph, TableLayout, UnorderedList,
};
use genpdf::style::{Color, Style, StyledString};
use genpdf::{Alignment, Element, Margins};
use std::path::Path;

/// Render a parsed document to a PDF file.
///
/// The output path is opened exclusively for the duration of one write;
/// partial-file behavior on failure is the engine's.
pub fn render_to_file<P: AsRef<Path>>(
    doc: &Document,
    path: P,
    options: &RenderOptions,
) -> Result<()> {
    let pdf = build_document(doc, options)?;
    log::debug!("rendering {} layout node(s) to PDF", doc.node_count());
    pdf.render_to_file(path)?;
    Ok(())
}

/// Render a parsed document to an arbitrary writer.
pub fn render_to_writer<W: std::io::Write>(
    doc: &Document,
    writer: W,
    options: &RenderOptions,
) -> Result<()> {
    let pdf = build_document(doc, options)?;
    pdf.render(writer)?;
    Ok(())
}

fn build_document(doc: &Document, options: &RenderOptions) -> Result<genpdf::Document> {
    let style = &options.style;

    let family = genpdf::fonts::from_files(&style.font_dir, &style.font_family, None).map_err(
        |e| {
            Error::Font(format!(
                "cannot load font family '{}' from {}: {}",
                style.font_family,
                style.font_dir.display(),
                e
            ))
        },
    )?;

    let mut pdf = genpdf::Document::new(family);
    pdf.set_title(report_title(doc, options));
    pdf.set_paper_size(genpdf::PaperSize::Letter);
    pdf.set_font_size(style.body_size);
    pdf.set_line_spacing(style.line_spacing);

    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(Margins::all(style.margin_mm));
    pdf.set_page_decorator(decorator);

    if options.insert_cover_page {
        push_cover(&mut pdf, doc, options);
    }

    for node in doc {
        push_node(&mut pdf, node, options)?;
    }

    Ok(pdf)
}

fn report_title(doc: &Document, options: &RenderOptions) -> String {
    options
        .title
        .clone()
        .or_else(|| doc.title())
        .unwrap_or_else(|| "Report".to_string())
}

fn push_cover(pdf: &mut genpdf::Document, doc: &Document, options: &RenderOptions) {
    let style = &options.style;

    pdf.push(Break::new(8.0));
    pdf.push(
        Paragraph::new(report_title(doc, options))
            .aligned(Alignment::Center)
            .styled(Style::new().bold().with_font_size(style.cover_title_size)),
    );

    if options.stamp_date {
        let stamp = chrono::Local::now().format("%B %-d, %Y").to_string();
        pdf.push(Break::new(2.0));
        pdf.push(Paragraph::new(stamp).aligned(Alignment::Center));
    }

    pdf.push(PageBreak::new());
}

fn push_node(pdf: &mut genpdf::Document, node: &LayoutNode, options: &RenderOptions) -> Result<()> {
    let style = &options.style;

    match node {
        LayoutNode::Heading { level, text } => {
            let heading_style = Style::new().bold().with_font_size(style.heading_size(*level));
            pdf.push(span_paragraph(text).styled(heading_style));
            pdf.push(Break::new(style.block_spacing));
        }
        LayoutNode::Paragraph { text } => {
            pdf.push(span_paragraph(text));
            pdf.push(Break::new(style.block_spacing));
        }
        LayoutNode::List(list) => {
            push_list(pdf, list);
            pdf.push(Break::new(style.block_spacing));
        }
        LayoutNode::Table(table) => {
            push_table(pdf, table, options)?;
            pdf.push(Break::new(style.block_spacing));
        }
        LayoutNode::PageBreak => {
            pdf.push(PageBreak::new());
        }
    }

    Ok(())
}

/// Build a paragraph from the styled runs of an inline span.
fn span_paragraph(span: &InlineSpan) -> Paragraph {
    let mut paragraph = Paragraph::default();
    for run in span.runs() {
        let mut style = Style::new();
        if run.bold {
            style = style.bold();
        }
        if run.italic {
            style = style.italic();
        }
        paragraph.push(StyledString::new(run.text, style));
    }
    paragraph
}

fn push_list(pdf: &mut genpdf::Document, list: &ListBlock) {
    if list.ordered {
        let mut ordered = OrderedList::new();
        for item in &list.items {
            ordered.push(span_paragraph(item));
        }
        pdf.push(ordered);
    } else {
        let mut unordered = UnorderedList::new();
        for item in &list.items {
            unordered.push(span_paragraph(item));
        }
        pdf.push(unordered);
    }
}

fn push_table(
    pdf: &mut genpdf::Document,
    table: &TableBlock,
    options: &RenderOptions,
) -> Result<()> {
    if table.is_empty() {
        return Ok(());
    }

    let style = &options.style;
    let alignment = match options.table_alignment {
        TableAlignment::Left => Alignment::Left,
        TableAlignment::Center => Alignment::Center,
    };

    let mut layout = TableLayout::new(vec![1; table.column_count()]);
    layout.set_cell_decorator(FrameCellDecorator::new(true, true, false));

    let mut row = layout.row();
    for cell in &table.headers {
        row = row.element(
            Paragraph::new(cell.clone())
                .aligned(alignment)
                .styled(header_style(style)),
        );
    }
    row.push().map_err(Error::from)?;

    for cells in &table.rows {
        let mut row = layout.row();
        for cell in cells {
            row = row.element(Paragraph::new(cell.clone()).aligned(alignment));
        }
        row.push().map_err(Error::from)?;
    }

    pdf.push(layout);
    Ok(())
}

/// The engine has no cell background fill, so the header row carries its
/// emphasis in the text: bold, optionally colored.
fn header_style(style: &StyleSheet) -> Style {
    let mut header = Style::new().bold();
    if let Some((r, g, b)) = style.table_header_color {
        header = header.with_color(Color::Rgb(r, g, b));
    }
    header
}
