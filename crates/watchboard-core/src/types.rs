//! Core types for watchboard-core.
//!
//! This module defines the data shared across all layers: the raw
//! [`TransactionRecord`] as published upstream, the [`NormalizedTransaction`]
//! produced by the pipeline, and the weather / astronomy records.

use serde::{Deserialize, Serialize};

/// One disclosed stock trade as received from the House disclosure feed.
///
/// Every field is optional on the wire. Keys the pipeline does not use are
/// kept verbatim in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TransactionRecord {
    #[serde(default)]
    pub representative: Option<String>,
    #[serde(default)]
    pub ticker: Option<String>,
    /// Dollar amount text, e.g. `"$1,234"` or `"$1,001 - $15,000"`.
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub transaction_date: Option<String>,
    /// Passthrough upstream keys (`type`, `owner`, `district`, …).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TransactionRecord {
    pub fn new(
        representative: impl Into<String>,
        ticker: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            representative: Some(representative.into()),
            ticker: Some(ticker.into()),
            amount: Some(amount.into()),
            ..Self::default()
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.transaction_date = Some(date.into());
        self
    }
}

/// A transaction after filtering, deduplication and amount parsing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedTransaction {
    /// Unique within one normalization result.
    pub ticker: String,
    /// Parsed dollar amount; `0.0` when the text had no leading number.
    pub amount: f64,
    /// The amount text exactly as published, for tabular display.
    pub amount_text: String,
    pub transaction_date: String,
    pub representative: String,
}

/// Latitude / longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A named location whose forecast can be fetched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct City {
    pub name: String,
    pub coordinates: Coordinates,
}

/// One hourly temperature sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyPoint {
    /// ISO-8601 local time as returned upstream (`2024-01-15T10:00`).
    pub time: String,
    pub celsius: f64,
}

impl HourlyPoint {
    /// Short `HH:MM` label for chart axes. Falls back to the raw text when
    /// the timestamp is not in the upstream format.
    pub fn hour_label(&self) -> String {
        chrono::NaiveDateTime::parse_from_str(&self.time, "%Y-%m-%dT%H:%M")
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|_| self.time.clone())
    }
}

/// The hourly forecast for one city, already truncated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    pub city: City,
    pub points: Vec<HourlyPoint>,
}

/// The astronomy picture of the day.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PictureOfDay {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub date: Option<String>,
}
