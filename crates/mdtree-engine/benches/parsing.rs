use criterion::{Criterion, criterion_group, criterion_main};
use mdtree_engine::{ParseOptions, markdown_to_html, parse_document, segment};
use pulldown_cmark::Parser;
mod common;

fn bench_pulldown_cmark_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let parser = Parser::new(std::hint::black_box(&content));
            let mut html = String::new();
            pulldown_cmark::html::push_html(&mut html, parser);
            std::hint::black_box(html);
        });
    });

    group.finish();
}

fn bench_document_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    let options = ParseOptions::default();

    group.bench_function("segment", |b| {
        b.iter(|| {
            let blocks: Vec<_> = segment(std::hint::black_box(&content)).collect();
            std::hint::black_box(blocks);
        });
    });

    group.bench_function("parse_document", |b| {
        b.iter(|| {
            let doc = parse_document(std::hint::black_box(&content)).unwrap();
            std::hint::black_box(doc);
        });
    });

    group.bench_function("markdown_to_html", |b| {
        b.iter(|| {
            let html = markdown_to_html(std::hint::black_box(&content), &options).unwrap();
            std::hint::black_box(html);
        });
    });

    let inline = common::generate_inline_heavy(200);
    group.bench_function("inline_heavy", |b| {
        b.iter(|| {
            let html = markdown_to_html(std::hint::black_box(&inline), &options).unwrap();
            std::hint::black_box(html);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_pulldown_cmark_baseline,
    bench_document_operations
);
criterion_main!(benches);
