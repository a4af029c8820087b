//! Integration tests for the conversion pipeline.
//!
//! Tests that render an actual PDF need the TTF font family on disk and
//! are skipped when `assets/fonts` is not populated.

use std::fs;
use std::path::PathBuf;

use mdreport::{convert_file, ConvertOptions, Error};

/// The font directory, if its files are present.
fn font_dir() -> Option<PathBuf> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts");
    dir.join("LiberationSans-Regular.ttf")
        .exists()
        .then_some(dir)
}

#[test]
fn test_missing_input_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.txt");
    let output = dir.path().join("out.pdf");

    let result = convert_file(&input, &output, &ConvertOptions::plain());

    match result {
        Err(Error::InputNotFound(path)) => assert_eq!(path, input),
        other => panic!("expected InputNotFound, got {other:?}"),
    }
    assert!(!output.exists());
}

#[test]
fn test_invalid_utf8_is_an_encoding_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("binary.txt");
    let output = dir.path().join("out.pdf");
    fs::write(&input, [0xFF, 0xFE, 0x00, 0x42]).unwrap();

    let result = convert_file(&input, &output, &ConvertOptions::plain());

    assert!(matches!(result, Err(Error::Encoding(_))));
    assert!(!output.exists());
}

#[test]
fn test_convert_writes_pdf() {
    let Some(fonts) = font_dir() else {
        eprintln!("skipping: assets/fonts is not populated");
        return;
    };

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.txt");
    let output = dir.path().join("report.pdf");
    fs::write(
        &input,
        "# Title\n\nHello **world**.\n\n| A | B |\n|---|---|\n| 1 | 2 |\n\n* one\n* two\n",
    )
    .unwrap();

    let mut options = ConvertOptions::plain();
    options.render = options.render.with_font_dir(fonts);

    let doc = convert_file(&input, &output, &options).unwrap();

    assert_eq!(doc.node_count(), 4);
    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_report_preset_renders_cover_and_sections() {
    let Some(fonts) = font_dir() else {
        eprintln!("skipping: assets/fonts is not populated");
        return;
    };

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sections.txt");
    let output = dir.path().join("sections.pdf");
    fs::write(&input, "# One\n\nfirst\n\n# Two\n\nsecond\n").unwrap();

    let mut options = ConvertOptions::report().with_title("Sections");
    options.render = options.render.with_font_dir(fonts);

    let doc = convert_file(&input, &output, &options).unwrap();

    // A page break was inserted between the two sections.
    assert!(doc.nodes.iter().any(|n| n.is_page_break()));
    assert!(output.exists());
}
