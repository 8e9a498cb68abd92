//! Validation throughput benchmarks
//!
//! Measures a full rule pass over valid and invalid candidates, and how the
//! uniqueness lookup scales with catalog size.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use depot::validation::NoTitles;
use depot::{InMemoryCatalog, Locale, Product, ValidationEngine};
use std::collections::HashSet;
use std::hint::black_box;

fn candidate(title: &str) -> Product {
    Product::new()
        .with_title(title)
        .with_description("Ruby is the fastest growing and most exciting dynamic language.")
        .with_price("49.50")
        .with_image_url("http://a.b.c/x/y/z/ruby.png")
}

fn bench_single_candidate(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_candidate");
    let engine = ValidationEngine::for_products().expect("product rules compile");
    let spanish = engine.with_locale(Locale::parse("es").expect("es is a valid locale"));

    let valid = candidate("Programming Ruby 1.9");
    let invalid = Product::new().with_price("abc").with_image_url("fred.doc");

    group.bench_function("valid", |b| {
        b.iter(|| black_box(engine.validate(black_box(&valid), &NoTitles)));
    });
    group.bench_function("invalid", |b| {
        b.iter(|| black_box(engine.validate(black_box(&invalid), &NoTitles)));
    });
    group.bench_function("invalid_spanish", |b| {
        b.iter(|| black_box(spanish.validate(black_box(&invalid), &NoTitles)));
    });

    group.finish();
}

fn bench_uniqueness_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniqueness_lookup");
    let engine = ValidationEngine::for_products().expect("product rules compile");
    let probe = candidate("Programming Ruby 1.9");

    for size in [10usize, 100, 1_000] {
        let titles: HashSet<String> = (0..size).map(|i| format!("Book number {i}")).collect();
        group.bench_with_input(BenchmarkId::new("hash_set", size), &titles, |b, titles| {
            b.iter(|| black_box(engine.validate(&probe, titles)));
        });

        let mut catalog = InMemoryCatalog::new();
        for title in &titles {
            catalog
                .create(&candidate(title), &engine)
                .expect("generated titles are unique");
        }
        group.bench_with_input(
            BenchmarkId::new("catalog", catalog.len()),
            &catalog,
            |b, catalog| {
                b.iter(|| black_box(engine.validate(&probe, catalog)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_candidate, bench_uniqueness_lookup);
criterion_main!(benches);
