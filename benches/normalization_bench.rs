//! Normalization pipeline benchmarks.
//!
//! The full disclosure feed is tens of thousands of records and is
//! re-normalized on every selection, so filter + dedup + sort has to stay
//! well under a frame.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `parse_amount` | Leading-token extraction for plain, range and junk amounts |
//! | `normalize` | One representative out of a synthetic feed, at several feed sizes |
//! | `decode` | `serde_json` decode of the raw feed into `TransactionRecord`s |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench normalization_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use watchboard_core::normalizer::{normalize, parse_amount};
use watchboard_core::TransactionRecord;

const REPS: &[&str] = &["Nancy Pelosi", "Ro Khanna", "Dan Crenshaw", "Josh Gottheimer", "Mark Green"];
const AMOUNTS: &[&str] = &[
    "$1,001 - $15,000",
    "$15,001 - $50,000",
    "$50,001 - $100,000",
    "$1,000,001 - $5,000,000",
    "$1,001",
    "N/A",
];

/// `n` records spread across a handful of representatives, with ticker
/// collisions so deduplication has work to do.
fn synthetic_feed(n: usize) -> Vec<TransactionRecord> {
    (0..n)
        .map(|i| {
            TransactionRecord::new(
                REPS[i % REPS.len()],
                format!("T{}", i % 400),
                AMOUNTS[i % AMOUNTS.len()],
            )
            .with_date(format!("2021-{:02}-{:02}", i % 12 + 1, i % 28 + 1))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// parse_amount
// ---------------------------------------------------------------------------

fn parse_amount_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_amount");
    group.throughput(Throughput::Elements(1));

    for (name, text) in [
        ("plain", "$1,234"),
        ("range", "$1,000,001 - $5,000,000"),
        ("junk", "N/A"),
    ] {
        group.bench_with_input(BenchmarkId::new(name, ""), &text, |b, text| {
            b.iter(|| parse_amount(black_box(text)))
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// normalize
// ---------------------------------------------------------------------------

fn normalize_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for size in [1_000usize, 10_000, 50_000] {
        let feed = synthetic_feed(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &feed, |b, feed| {
            b.iter(|| normalize(black_box(feed), "nancy pelosi").map(|rows| rows.len()))
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// decode
// ---------------------------------------------------------------------------

fn decode_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    let feed = synthetic_feed(10_000);
    let body = serde_json::to_string(&feed).unwrap();
    group.throughput(Throughput::Bytes(body.len() as u64));

    group.bench_function("feed_10k", |b| {
        b.iter(|| {
            let records: Vec<TransactionRecord> = serde_json::from_str(black_box(&body)).unwrap();
            records.len()
        })
    });

    group.finish();
}

criterion_group!(benches, parse_amount_bench, normalize_bench, decode_bench);
criterion_main!(benches);
