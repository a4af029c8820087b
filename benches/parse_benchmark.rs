//! Benchmarks for mdreport parsing performance.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic document with the given number of sections.
fn create_test_document(section_count: usize) -> String {
    let mut content = String::new();

    for i in 0..section_count {
        content.push_str(&format!("# Section {}\n\n", i + 1));
        content.push_str("A paragraph with **bold** and *italic* emphasis in it.\n\n");

        content.push_str("| Metric | Value |\n|--------|-------|\n");
        for row in 0..5 {
            content.push_str(&format!("| metric {row} | {row} |\n"));
        }
        content.push('\n');

        content.push_str("* first point\n* second point\n* third point\n\n");
        content.push_str("1. ranked one\n2. ranked two\n\n");
    }

    content
}

/// Benchmark full-document parsing at various sizes.
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for section_count in [1, 10, 50].iter() {
        let input = create_test_document(*section_count);

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| mdreport::parse_str(black_box(&input)));
        });
    }

    group.finish();
}

/// Benchmark the inline transformer on marker-heavy text.
fn bench_inline_transform(c: &mut Criterion) {
    let transformer = mdreport::InlineTransformer::new(true);
    let line = "some **bold** then *italic* and __more bold__ plus _more italic_ repeated";

    c.bench_function("inline_transform", |b| {
        b.iter(|| transformer.transform(black_box(line)));
    });
}

/// Benchmark builder pattern overhead.
fn bench_builder_creation(c: &mut Criterion) {
    c.bench_function("builder_creation", |b| {
        b.iter(|| {
            let _builder = mdreport::Mdreport::report()
                .with_title("Benchmark")
                .with_italic(true);
        });
    });
}

criterion_group!(
    benches,
    bench_parsing,
    bench_inline_transform,
    bench_builder_creation,
);
criterion_main!(benches);
