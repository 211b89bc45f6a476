use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use family_ledger::{
    aggregate,
    domain::{TransactionKind, TransactionRecord},
    DailyAggregateCache,
};

fn build_sample(txn_count: usize) -> Vec<TransactionRecord> {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    (0..txn_count)
        .map(|idx| {
            let date = (start + Duration::days((idx % 365) as i64))
                .format("%Y-%m-%d")
                .to_string();
            let record = TransactionRecord::new(date, 5.0 + (idx % 100) as f64);
            match idx % 5 {
                0 => record.with_kind(TransactionKind::Income),
                1 => record.with_note("Received from Grandma"),
                2 => record.with_note("To Brother"),
                3 => record.with_category("Granted"),
                _ => record.with_category("Food"),
            }
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let txns = build_sample(black_box(10_000));

    c.bench_function("aggregate_10k", |b| {
        b.iter(|| {
            let days = aggregate(&txns);
            black_box(days);
        })
    });

    let shared: Arc<[TransactionRecord]> = Arc::from(txns);
    let mut cache = DailyAggregateCache::new();
    c.bench_function("aggregate_cached_10k", |b| {
        b.iter(|| {
            black_box(cache.get(&shared).len());
        })
    });
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
