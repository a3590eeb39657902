use cityscribe_core::city::{RankingTable, TableCache};
use cityscribe_core::Locale;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn sample_csv(rows: usize) -> String {
    (0..rows)
        .map(|i| {
            let population = (i * 7919) % 1_000_003;
            format!("{}.0,{}.0,City{i},{population} # row {i}\n", i % 90, i % 180)
        })
        .collect()
}

fn bench_rank(c: &mut Criterion) {
    let csv = sample_csv(10_000);
    c.bench_function("rank 10k rows", |b| {
        b.iter(|| RankingTable::from_csv_lenient(black_box(&csv)))
    });
}

fn bench_annotate(c: &mut Criterion) {
    let csv = sample_csv(10_000);
    let cache = TableCache::new();
    let annotator = cache.annotator(&csv, Locale::En);
    let text: String = annotator
        .table()
        .iter()
        .map(|city| format!("Visit {} soon. ", city.name))
        .collect::<String>()
        .repeat(50);

    c.bench_function("annotate cached table", |b| {
        b.iter(|| annotator.annotate(black_box(&text)))
    });
    c.bench_function("cache hit", |b| b.iter(|| cache.table(black_box(&csv))));
}

criterion_group!(benches, bench_rank, bench_annotate);
criterion_main!(benches);
