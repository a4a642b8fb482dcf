//! One-shot reports for `watchboard stocks` and `watchboard weather`.
//!
//! Both reports go through the same fetch-then-transform pipeline the TUI
//! uses, so they fail with the same user-facing messages.

use watchboard_core::error::Result;
use watchboard_core::normalizer::{format_usd, top_n};
use watchboard_core::state::ForecastTarget;
use watchboard_core::{Forecast, NormalizedTransaction};
use watchboard_feeds::pipeline::{load_forecast, load_transactions};
use watchboard_feeds::{ForecastSource, GeocodingSource, TransactionSource};

/// Fetch and render the transactions table for `representative`.
pub async fn stocks_report<S: TransactionSource>(
    source: &S,
    representative: &str,
    limit: usize,
) -> Result<String> {
    let transactions = load_transactions(source, representative).await?;
    Ok(render_transactions(representative, &transactions, limit))
}

/// Fetch and render the hourly forecast for `city`.
pub async fn weather_report<F, G>(forecast: &F, geocoder: &G, city: &str, hours: usize) -> Result<String>
where
    F: ForecastSource,
    G: GeocodingSource,
{
    let target = ForecastTarget::for_name(city);
    let forecast = load_forecast(forecast, geocoder, target, hours).await?;
    Ok(render_forecast(&forecast))
}

pub fn render_transactions(
    representative: &str,
    transactions: &[NormalizedTransaction],
    limit: usize,
) -> String {
    let mut lines = vec![
        format!("Stock Transactions for {representative}"),
        format!("{:<8} {:>14}  {:<22} {}", "Stock", "Amount", "Disclosed", "Date"),
    ];
    lines.extend(top_n(transactions, limit).iter().map(|t| {
        format!(
            "{:<8} {:>14}  {:<22} {}",
            t.ticker,
            format_usd(t.amount),
            t.amount_text,
            t.transaction_date
        )
    }));
    terminated(lines)
}

pub fn render_forecast(forecast: &Forecast) -> String {
    let mut lines = vec![format!("Temperature for {} (°C)", forecast.city.name)];
    lines.extend(
        forecast
            .points
            .iter()
            .map(|point| format!("{}  {:>6.1}", point.hour_label(), point.celsius)),
    );
    terminated(lines)
}

/// Join report lines, each ending in a newline.
fn terminated(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}
