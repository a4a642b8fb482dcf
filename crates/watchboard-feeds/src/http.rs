//! Thin JSON-over-HTTPS client shared by every feed.
//!
//! Transport failures and non-success statuses become
//! [`WatchError::Fetch`]; bodies that do not deserialize become
//! [`WatchError::Parse`]. Nothing is retried.

use std::time::Duration;

use serde::de::DeserializeOwned;
use watchboard_core::error::{Result, WatchError};

const USER_AGENT: &str = concat!("watchboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| WatchError::fetch(format!("Failed to start HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// GET `url` with `query` and deserialize the body as `T`.
    ///
    /// `what` names the resource in user-facing messages ("transactions",
    /// "forecast", …).
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
        what: &str,
    ) -> Result<T> {
        tracing::debug!(url, ?query, what, "GET");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(url, error = %e, "request failed");
                WatchError::fetch(format!("Failed to fetch {what}."))
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, %status, "non-success status");
            return Err(WatchError::fetch(format!(
                "Failed to fetch {what} (HTTP {}).",
                status.as_u16()
            )));
        }

        let body = response.text().await.map_err(|e| {
            tracing::warn!(url, error = %e, "body read failed");
            WatchError::fetch(format!("Failed to fetch {what}."))
        })?;
        tracing::debug!(url, bytes = body.len(), "response received");

        serde_json::from_str(&body).map_err(|e| WatchError::parse(what, e))
    }
}
