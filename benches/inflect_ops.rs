//! Benchmarks for inflection lookups.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use noun_inflect::engine::{Inflector, InflectorConfig};
use noun_inflect::rules::RuleSet;

const WORDS: &[&str] = &[
    "person", "country", "status", "matrix", "knife", "analysis", "sheep", "hat", "SalesPerson",
    "user_category",
];

fn uncached() -> Inflector {
    Inflector::new(InflectorConfig {
        cache: false,
        ..Default::default()
    })
    .unwrap()
}

fn bench_pluralize_cached(c: &mut Criterion) {
    let inflector = Inflector::default();
    c.bench_function("pluralize_cached", |bench| {
        bench.iter(|| {
            for word in WORDS {
                black_box(inflector.pluralize(black_box(word)));
            }
        })
    });
}

fn bench_pluralize_uncached(c: &mut Criterion) {
    let inflector = uncached();
    c.bench_function("pluralize_uncached", |bench| {
        bench.iter(|| {
            for word in WORDS {
                black_box(inflector.pluralize(black_box(word)));
            }
        })
    });
}

fn bench_singularize_uncached(c: &mut Criterion) {
    let inflector = uncached();
    let plurals: Vec<String> = WORDS.iter().map(|w| inflector.pluralize(w)).collect();
    c.bench_function("singularize_uncached", |bench| {
        bench.iter(|| {
            for word in &plurals {
                black_box(inflector.singularize(black_box(word)));
            }
        })
    });
}

fn bench_default_tables(c: &mut Criterion) {
    c.bench_function("clone_default_tables", |bench| {
        bench.iter(|| black_box(RuleSet::defaults()))
    });
}

criterion_group!(
    benches,
    bench_pluralize_cached,
    bench_pluralize_uncached,
    bench_singularize_uncached,
    bench_default_tables
);
criterion_main!(benches);
