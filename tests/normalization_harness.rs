#![allow(unused)]
//! Normalization pipeline integration harness.
//!
//! # What this covers
//!
//! - **Filtering**: exact, case-insensitive representative match. Titles
//!   ("Hon. Nancy Pelosi") are a different name.
//! - **Deduplication**: one row per ticker, first occurrence wins, including
//!   records with a missing ticker.
//! - **Amount policy**: leading numeric token only, table-driven with rstest.
//! - **Ordering**: descending by amount, stable for ties.
//! - **Invariants under random input**: proptest over generated feeds.
//! - **Output shape**: an insta inline snapshot of the normalized feed.
//!
//! # Running
//!
//! ```sh
//! cargo test --test normalization_harness
//! # Update the inline snapshot after an intentional change:
//! cargo insta review
//! ```

mod common;
use common::*;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use watchboard_core::normalizer::{format_usd, normalize, parse_amount, top_n};
use watchboard_core::{TransactionRecord, WatchError};

fn feed() -> Vec<TransactionRecord> {
    serde_json::from_str(TRANSACTIONS_JSON).expect("fixture is valid JSON")
}

fn tickers(rows: &[watchboard_core::NormalizedTransaction]) -> Vec<&str> {
    rows.iter().map(|t| t.ticker.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Amount policy
// ---------------------------------------------------------------------------

#[rstest]
#[case::plain("$1,234", 1234.0)]
#[case::range_lower_bound("$1,001 - $15,000", 1001.0)]
#[case::millions("$1,000,001 - $5,000,000", 1_000_001.0)]
#[case::no_dollar_sign("250", 250.0)]
#[case::decimals("$12.50", 12.5)]
#[case::padded("  $ 7,000 ", 7000.0)]
#[case::not_available("N/A", 0.0)]
#[case::empty("", 0.0)]
#[case::trailing_words_only("over $50,000", 0.0)]
fn amount_policy(#[case] text: &str, #[case] expected: f64) {
    assert_eq!(parse_amount(text), expected);
}

#[rstest]
#[case(0.0, "$0")]
#[case(999.0, "$999")]
#[case(1001.0, "$1,001")]
#[case(1_000_001.0, "$1,000,001")]
fn usd_formatting(#[case] amount: f64, #[case] expected: &str) {
    assert_eq!(format_usd(amount), expected);
}

// ---------------------------------------------------------------------------
// Filtering, dedup and ordering over the upstream-shaped fixture
// ---------------------------------------------------------------------------

#[rstest]
#[case::as_written("Nancy Pelosi")]
#[case::lower("nancy pelosi")]
#[case::upper("NANCY PELOSI")]
fn name_match_ignores_case(#[case] name: &str) {
    let rows = normalize(&feed(), name).unwrap();
    assert_eq!(tickers(&rows), vec!["MSFT", "TSLA", "AAPL"]);
}

#[test]
fn first_occurrence_of_a_ticker_wins() {
    // The titled "Hon. Nancy Pelosi" AAPL row does not match, so the
    // surviving AAPL row is the $50,001 sale.
    let rows = normalize(&feed(), "Nancy Pelosi").unwrap();
    let aapl = rows.iter().find(|t| t.ticker == "AAPL").unwrap();
    assert_eq!(aapl.amount, 50_001.0);
    assert_eq!(aapl.transaction_date, "2021-01-14");
}

#[test]
fn missing_ticker_is_kept_as_empty_and_sorts_by_amount() {
    let rows = normalize(&feed(), "Dan Crenshaw").unwrap();
    assert_eq!(tickers(&rows), vec!["", "XOM"]);
    assert_eq!(rows[1].amount, 0.0);
    assert_eq!(rows[1].amount_text, "N/A");
}

#[test]
fn unknown_representative_is_not_found() {
    let err = normalize(&feed(), "Jane Doe").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(
        err.to_string(),
        "No transactions found for \"Jane Doe\". Please enter a valid representative."
    );
    assert!(matches!(err, WatchError::NotFound { .. }));
}

#[test]
fn ties_keep_first_seen_order() {
    let records = vec![
        record("Ro Khanna", "B", "$1,001 - $15,000"),
        record("Ro Khanna", "A", "$1,001 - $15,000"),
        record("Ro Khanna", "C", "$15,001 - $50,000"),
        record("Ro Khanna", "D", "$1,001"),
    ];
    let rows = normalize(&records, "Ro Khanna").unwrap();
    assert_eq!(tickers(&rows), vec!["C", "B", "A", "D"]);
}

#[test]
fn recent_buys_are_the_first_five() {
    let records: Vec<_> = (1..=8)
        .map(|i| {
            RecordBuilder::new("Ro Khanna")
                .ticker(&format!("T{i}"))
                .amount(&format!("${}", i * 1000))
                .date(&format!("2021-01-0{i}"))
                .build()
        })
        .collect();
    let rows = normalize(&records, "ro khanna").unwrap();
    let recent = top_n(&rows, 5);
    assert_eq!(tickers(recent), vec!["T8", "T7", "T6", "T5", "T4"]);
    assert_eq!(top_n(&rows[..2], 5).len(), 2);
}

#[test]
fn normalized_feed_snapshot() {
    let rows = normalize(&feed(), "Nancy Pelosi").unwrap();
    let summary: String = rows
        .iter()
        .map(|t| format!("{} {} {}\n", t.ticker, format_usd(t.amount), t.transaction_date))
        .collect();
    insta::assert_snapshot!(summary, @r"
MSFT $1,000,001 2021-01-22
TSLA $500,001 2021-01-08
AAPL $50,001 2021-01-14
");
}

// ---------------------------------------------------------------------------
// Invariants under random feeds
// ---------------------------------------------------------------------------

const REPS: &[&str] = &["Nancy Pelosi", "nancy pelosi", "NANCY PELOSI", "Ro Khanna", "Dan Crenshaw"];
const TICKERS: &[&str] = &["AAPL", "MSFT", "TSLA", "NVDA", "XOM", "AMZN", "GOOG", ""];
const BRACKETS: &[u32] = &[1_001, 15_001, 50_001, 1_000_001];

/// `1234567` → `"1,234,567"`.
fn comma_grouped(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Disclosure amounts in the shapes the feed actually publishes. The few
/// bracket bounds make equal amounts common so tie order gets exercised.
fn arb_amount() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..5_000_000).prop_map(|n| format!("${}", comma_grouped(n))),
        prop::sample::select(BRACKETS)
            .prop_map(|lo| format!("${} - ${}", comma_grouped(lo), comma_grouped(lo * 3))),
        prop::sample::select(BRACKETS).prop_map(|lo| format!("${}", comma_grouped(lo))),
        (0u32..100_000).prop_map(|n| n.to_string()),
        Just("N/A".to_string()),
    ]
}

fn arb_record() -> impl Strategy<Value = TransactionRecord> {
    (prop::sample::select(REPS), prop::sample::select(TICKERS), arb_amount())
        .prop_map(|(rep, ticker, amount)| record(rep, ticker, &amount))
}

/// Straight-line model of the pipeline: filter, keep first per ticker, then
/// a stable descending sort.
fn expected_rows(records: &[TransactionRecord], name: &str) -> Vec<(String, String)> {
    let wanted = name.to_lowercase();
    let mut seen = std::collections::HashSet::new();
    let mut rows: Vec<(String, String)> = records
        .iter()
        .filter(|r| r.representative.as_deref().map(str::to_lowercase).as_deref() == Some(wanted.as_str()))
        .filter(|r| seen.insert(r.ticker.clone().unwrap_or_default()))
        .map(|r| (r.ticker.clone().unwrap_or_default(), r.amount.clone().unwrap_or_default()))
        .collect();
    rows.sort_by(|a, b| parse_amount(&b.1).total_cmp(&parse_amount(&a.1)));
    rows
}

proptest! {
    #[test]
    fn output_is_a_stable_sort_of_the_deduplicated_subset(
        records in prop::collection::vec(arb_record(), 0..60),
    ) {
        let expected = expected_rows(&records, "Nancy Pelosi");
        match normalize(&records, "Nancy Pelosi") {
            Err(err) => {
                prop_assert!(err.is_not_found());
                prop_assert!(expected.is_empty());
            }
            Ok(rows) => {
                let got: Vec<(String, String)> = rows
                    .iter()
                    .map(|r| (r.ticker.clone(), r.amount_text.clone()))
                    .collect();
                prop_assert_eq!(got, expected);
                for row in &rows {
                    prop_assert_eq!(row.representative.to_lowercase(), "nancy pelosi");
                    prop_assert_eq!(row.amount, parse_amount(&row.amount_text));
                }
            }
        }
    }
}
