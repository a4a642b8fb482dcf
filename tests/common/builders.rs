//! Test builders for disclosure records.
//!
//! Designed for readability in test assertions, not for production use.

use watchboard_core::TransactionRecord;

/// Fluent builder for [`TransactionRecord`] fixtures.
///
/// ```rust,ignore
/// let rec = RecordBuilder::new("Ro Khanna")
///     .ticker("AAPL")
///     .amount("$1,001 - $15,000")
///     .date("2021-03-01")
///     .build();
/// ```
pub struct RecordBuilder {
    record: TransactionRecord,
}

impl RecordBuilder {
    pub fn new(representative: &str) -> Self {
        Self {
            record: TransactionRecord {
                representative: Some(representative.to_string()),
                ..TransactionRecord::default()
            },
        }
    }

    pub fn ticker(mut self, ticker: &str) -> Self {
        self.record.ticker = Some(ticker.to_string());
        self
    }

    pub fn amount(mut self, amount: &str) -> Self {
        self.record.amount = Some(amount.to_string());
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.record.transaction_date = Some(date.to_string());
        self
    }

    pub fn build(self) -> TransactionRecord {
        self.record
    }
}

/// Shorthand for the common (representative, ticker, amount) record.
pub fn record(representative: &str, ticker: &str, amount: &str) -> TransactionRecord {
    RecordBuilder::new(representative).ticker(ticker).amount(amount).build()
}
