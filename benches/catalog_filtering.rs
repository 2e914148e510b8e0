// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for catalog filtering and lookup.
//!
//! The catalog is tiny, so these mostly guard against accidental algorithmic
//! regressions (e.g. a quadratic pass sneaking into the filter).

use criterion::{criterion_group, criterion_main, Criterion};
use iced_folio::catalog::projects::{self, CategoryFilter};
use std::hint::black_box;

fn bench_visible(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_filtering");

    group.bench_function("visible_all", |b| {
        b.iter(|| {
            let records = projects::visible(black_box(CategoryFilter::All));
            black_box(records);
        });
    });

    group.bench_function("visible_mobile", |b| {
        b.iter(|| {
            let records = projects::visible(black_box(CategoryFilter::Mobile));
            black_box(records);
        });
    });

    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_lookup");

    group.bench_function("find_last", |b| {
        b.iter(|| {
            let record = projects::find(black_box(6));
            black_box(record);
        });
    });

    group.bench_function("find_missing", |b| {
        b.iter(|| {
            let record = projects::find(black_box(99));
            black_box(record);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_visible, bench_find);
criterion_main!(benches);
