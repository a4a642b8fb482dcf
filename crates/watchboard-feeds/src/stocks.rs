//! House Stock Watcher disclosure feed.
//!
//! The upstream publishes every transaction ever disclosed as one JSON
//! array; there is no server-side filtering, so each selection downloads the
//! whole file.

use watchboard_core::error::Result;
use watchboard_core::TransactionRecord;

use crate::http::HttpClient;
use crate::TransactionSource;

pub struct HouseStockFeed {
    http: HttpClient,
    url: String,
}

impl HouseStockFeed {
    pub fn new(http: HttpClient, url: impl Into<String>) -> Self {
        Self { http, url: url.into() }
    }
}

impl TransactionSource for HouseStockFeed {
    async fn fetch_all(&self) -> Result<Vec<TransactionRecord>> {
        let records: Vec<TransactionRecord> =
            self.http.get_json(&self.url, &[], "transactions").await?;
        tracing::debug!(count = records.len(), "disclosure feed downloaded");
        Ok(records)
    }
}
