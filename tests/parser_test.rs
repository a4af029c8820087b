//! Integration tests for the parsing pipeline.

use mdreport::{parse_str, parse_str_with_options, LayoutNode, ParseOptions};

#[test]
fn test_heading_level_matches_marker_count() {
    for level in 1..=6u8 {
        let input = format!("{} Heading text", "#".repeat(level as usize));
        let doc = parse_str(&input);

        assert_eq!(doc.node_count(), 1);
        match &doc.nodes[0] {
            LayoutNode::Heading { level: found, text } => {
                assert_eq!(*found, level);
                assert_eq!(text.plain_text(), "Heading text");
            }
            other => panic!("expected heading, got {other:?}"),
        }
    }
}

#[test]
fn test_seven_markers_never_match_as_heading() {
    let doc = parse_str("####### overdeep");
    assert!(matches!(&doc.nodes[0], LayoutNode::Paragraph { .. }));
}

#[test]
fn test_table_round_trip_example() {
    let doc = parse_str("| A | B |\n|---|---|\n| 1 | 2 |\n| x |");

    assert_eq!(doc.node_count(), 1);
    let LayoutNode::Table(table) = &doc.nodes[0] else {
        panic!("expected table");
    };
    assert_eq!(table.column_count(), 2);
    assert_eq!(table.headers, vec!["A", "B"]);
    assert_eq!(table.rows, vec![vec!["1", "2"]]);
}

#[test]
fn test_table_kept_rows_equal_matching_arity_rows() {
    let input = "| A | B | C |\n|---|---|---|\n| 1 | 2 | 3 |\n| 4 | 5 |\n| 6 | 7 | 8 |\n| 9 |";
    let doc = parse_str(input);

    let LayoutNode::Table(table) = &doc.nodes[0] else {
        panic!("expected table");
    };
    assert_eq!(table.row_count(), 2);
}

#[test]
fn test_list_run_emits_one_block() {
    let doc = parse_str("1. alpha\n2. beta\n3. gamma");

    assert_eq!(doc.node_count(), 1);
    let LayoutNode::List(list) = &doc.nodes[0] else {
        panic!("expected list");
    };
    assert!(list.ordered);
    assert_eq!(list.item_count(), 3);
}

#[test]
fn test_list_type_fixed_by_first_marker() {
    let doc = parse_str("* bullet first\n1. numbered later");

    let LayoutNode::List(list) = &doc.nodes[0] else {
        panic!("expected list");
    };
    assert!(!list.ordered);
    assert_eq!(list.item_count(), 2);
}

#[test]
fn test_bold_resolves_before_italic() {
    let doc = parse_str("**hi** and *there*");

    let LayoutNode::Paragraph { text } = &doc.nodes[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(text.as_markup(), "<b>hi</b> and <i>there</i>");
}

#[test]
fn test_unmatched_marker_passes_through() {
    let doc = parse_str("this *is not closed");

    let LayoutNode::Paragraph { text } = &doc.nodes[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(text.as_markup(), "this *is not closed");
}

#[test]
fn test_transform_idempotent_without_markers() {
    let doc_once = parse_str("nothing fancy here");
    let LayoutNode::Paragraph { text } = &doc_once.nodes[0] else {
        panic!("expected paragraph");
    };

    let doc_twice = parse_str(text.as_markup());
    assert_eq!(doc_once.nodes, doc_twice.nodes);
}

#[test]
fn test_report_options_insert_section_breaks() {
    let options = ParseOptions::new().with_section_breaks(true);
    let doc = parse_str_with_options("# One\n\nbody\n\n# Two\n\nbody", options);

    let breaks = doc.nodes.iter().filter(|n| n.is_page_break()).count();
    assert_eq!(breaks, 1);
    assert!(!doc.nodes[0].is_page_break());
}

#[test]
fn test_blank_lines_separate_blocks() {
    let doc = parse_str("* a\n\n* b");
    assert_eq!(doc.node_count(), 2);
}

#[test]
fn test_full_document_structure() {
    let input = "\
# Annual Report

This report covers **all** operations.

## Financials

| Quarter | Revenue |
|---------|---------|
| Q1 | 10 |
| Q2 | 12 |

Key points:

* revenue grew
* costs fell

1. hire
2. expand
";
    let doc = parse_str(input);

    let kinds: Vec<&str> = doc
        .nodes
        .iter()
        .map(|n| match n {
            LayoutNode::Heading { .. } => "heading",
            LayoutNode::Paragraph { .. } => "paragraph",
            LayoutNode::List(_) => "list",
            LayoutNode::Table(_) => "table",
            LayoutNode::PageBreak => "break",
        })
        .collect();

    assert_eq!(
        kinds,
        vec![
            "heading",
            "paragraph",
            "heading",
            "table",
            "paragraph",
            "list",
            "list"
        ]
    );
    assert_eq!(doc.title(), Some("Annual Report".to_string()));
}
