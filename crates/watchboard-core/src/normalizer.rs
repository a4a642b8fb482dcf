//! Normalizer — turns the raw disclosure feed into a per-representative list
//! of [`NormalizedTransaction`] values.
//!
//! Steps, in order: filter by representative (case-insensitive exact match)
//! → deduplicate by ticker (first occurrence wins) → parse amounts → stable
//! sort by amount, largest first.
//!
//! # Amount policy
//!
//! Only the leading numeric token counts: an optional `$`, then digits with
//! `,` grouping and an optional decimal part. Ranges such as
//! `"$1,001 - $15,000"` therefore parse as their lower bound. Text with no
//! leading number (`"N/A"`, `""`) is `0`.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, WatchError};
use crate::types::{NormalizedTransaction, TransactionRecord};

static LEADING_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\$?\s*(\d[\d,]*(?:\.\d+)?)").expect("amount pattern is valid")
});

/// Filter, deduplicate, parse and sort `records` for one representative.
///
/// Fails with [`WatchError::NotFound`] when no record carries
/// `target_name`. The caller must then clear anything it was displaying.
pub fn normalize(
    records: &[TransactionRecord],
    target_name: &str,
) -> Result<Vec<NormalizedTransaction>> {
    let wanted = target_name.to_lowercase();

    let matching: Vec<&TransactionRecord> = records
        .iter()
        .filter(|r| {
            r.representative
                .as_deref()
                .is_some_and(|name| name.to_lowercase() == wanted)
        })
        .collect();

    if matching.is_empty() {
        tracing::debug!(representative = target_name, total = records.len(), "no matching records");
        return Err(WatchError::no_transactions(target_name));
    }

    let mut seen = HashSet::new();
    let mut out: Vec<NormalizedTransaction> = matching
        .into_iter()
        .filter(|r| seen.insert(r.ticker.clone().unwrap_or_default()))
        .map(|r| {
            let amount_text = r.amount.clone().unwrap_or_default();
            NormalizedTransaction {
                ticker: r.ticker.clone().unwrap_or_default(),
                amount: parse_amount(&amount_text),
                amount_text,
                transaction_date: r.transaction_date.clone().unwrap_or_default(),
                representative: r.representative.clone().unwrap_or_default(),
            }
        })
        .collect();

    // `sort_by` is stable, so equal amounts keep their first-seen order.
    out.sort_by(|a, b| b.amount.total_cmp(&a.amount));

    tracing::debug!(
        representative = target_name,
        unique = seen.len(),
        "normalized transactions"
    );
    Ok(out)
}

/// Parse a disclosure amount into dollars. See the module docs for the policy.
pub fn parse_amount(text: &str) -> f64 {
    LEADING_AMOUNT
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().replace(',', "").parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// The first `n` entries of a normalized result (the "recent great buys").
pub fn top_n(transactions: &[NormalizedTransaction], n: usize) -> &[NormalizedTransaction] {
    &transactions[..n.min(transactions.len())]
}

/// Format whole dollars with thousands separators: `1234567.0` → `$1,234,567`.
pub fn format_usd(amount: f64) -> String {
    let whole = amount.max(0.0).round() as u64;
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
