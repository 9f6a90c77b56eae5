use babyname_engine::{
    core::{Metric, NameRecord, Order, ReferenceTable, Sex},
    ranking::{score_multi, score_single, top_n},
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn create_test_table(count: usize) -> ReferenceTable {
    let records = (0..count).map(|i| {
        let sex = if i % 2 == 0 { Sex::Female } else { Sex::Male };
        NameRecord::new(format!("Name{}", i), sex, (count - i) as u64)
    });
    ReferenceTable::from_records(Sex::Female, 2020, records)
}

fn bench_scoring(c: &mut Criterion) {
    let table_1k = create_test_table(1_000);
    let table_20k = create_test_table(20_000);

    c.bench_function("score_single_1k", |b| {
        b.iter(|| black_box(score_single(&table_1k, "Name500")));
    });

    c.bench_function("score_single_20k", |b| {
        b.iter(|| black_box(score_single(&table_20k, "Name500")));
    });

    c.bench_function("score_multi_20k_3_queries", |b| {
        b.iter(|| black_box(score_multi(&table_20k, &["Name1", "Name22", "Name333"]).unwrap()));
    });
}

fn bench_top_n(c: &mut Criterion) {
    let scored = score_single(&create_test_table(20_000), "Name500");

    c.bench_function("top_30_jaro_winkler_20k", |b| {
        b.iter(|| black_box(top_n(&scored, Metric::JaroWinkler, 30, Order::Largest)));
    });
}

criterion_group!(benches, bench_scoring, bench_top_n);
criterion_main!(benches);
