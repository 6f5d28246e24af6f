//! Benchmarks for pdfoutline heading detection.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic layout pages mixing headings and body text.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pdfoutline::{
    HeadingFilter, LayoutPage, NormalizedLine, NumberingClassifier, OutlineBuilder, RawLine,
    RawSpan,
};

/// Creates synthetic pages, each with two headings and a run of body lines.
fn create_test_pages(page_count: usize) -> Vec<LayoutPage> {
    (0..page_count)
        .map(|i| {
            let mut page = LayoutPage::letter(i as u32 + 1);
            let section = i + 1;

            page.add_line(RawLine::new(vec![RawSpan::new(
                format!("{} Section Heading", section),
                16.0,
                "Helvetica-Bold",
                (72.0, 72.0),
            )
            .with_width(180.0)]));

            for line in 0..40 {
                page.add_line(RawLine::new(vec![RawSpan::new(
                    "the quick brown fox jumps over the lazy dog near the river bank.",
                    10.0,
                    "Helvetica",
                    (72.0, 100.0 + line as f64 * 14.0),
                )
                .with_width(420.0)]));
            }

            page.add_line(RawLine::new(vec![
                RawSpan::new(format!("{}.1 ", section), 12.0, "Helvetica-Bold", (72.0, 700.0))
                    .with_width(24.0),
                RawSpan::new("Detailed Findings", 12.0, "Helvetica-Bold", (96.0, 700.0))
                    .with_width(110.0),
            ]));
            page
        })
        .collect()
}

/// Benchmark the filter cascade on lines reaching each stage.
fn bench_filter(c: &mut Criterion) {
    let filter = HeadingFilter::default();
    let rejected = NormalizedLine::new("The results are summarised below.", 1);
    let accepted = NormalizedLine::new("3.2 Experimental Setup", 1);
    let scored = NormalizedLine::new("Results and discussion", 1)
        .with_font_size(14.0)
        .with_bold(true)
        .with_y_norm(0.2)
        .with_placement(200.0, 212.0, 612.0);

    c.bench_function("filter_reject", |b| {
        b.iter(|| filter.is_heading(black_box(&rejected)));
    });

    c.bench_function("filter_accept", |b| {
        b.iter(|| filter.is_heading(black_box(&accepted)));
    });

    c.bench_function("filter_score", |b| {
        b.iter(|| filter.is_heading(black_box(&scored)));
    });
}

/// Benchmark full outline construction at various sizes.
fn bench_outline_building(c: &mut Criterion) {
    let classifier = NumberingClassifier::default();
    let builder = OutlineBuilder::new(&classifier);
    let mut group = c.benchmark_group("outline_building");

    for page_count in [1, 10, 50].iter() {
        let pages = create_test_pages(*page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| builder.build(black_box(&pages), "benchmark").unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter, bench_outline_building);
criterion_main!(benches);
