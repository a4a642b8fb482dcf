//! Static upstream payloads shared by the harnesses.

/// A slice of the House disclosure feed, in upstream shape. Includes a
/// duplicate ticker, a range amount, mixed-case names, a record with no
/// ticker and keys the pipeline ignores.
pub const TRANSACTIONS_JSON: &str = r#"[
  {"disclosure_year": 2021, "disclosure_date": "03/04/2021", "transaction_date": "2021-02-19",
   "owner": "spouse", "ticker": "AAPL", "asset_description": "Apple Inc.", "type": "purchase",
   "amount": "$1,001 - $15,000", "representative": "Hon. Nancy Pelosi", "district": "CA12"},
  {"transaction_date": "2021-01-22", "ticker": "MSFT", "type": "purchase",
   "amount": "$1,000,001 - $5,000,000", "representative": "Nancy Pelosi"},
  {"transaction_date": "2021-01-14", "ticker": "AAPL", "type": "sale_full",
   "amount": "$50,001 - $100,000", "representative": "nancy pelosi"},
  {"transaction_date": "2021-01-08", "ticker": "TSLA", "type": "purchase",
   "amount": "$500,001 - $1,000,000", "representative": "NANCY PELOSI"},
  {"transaction_date": "2020-12-30", "ticker": "NVDA", "type": "purchase",
   "amount": "$15,001 - $50,000", "representative": "Ro Khanna"},
  {"transaction_date": "2020-12-30", "ticker": "--", "type": "purchase",
   "amount": "$1,001 - $15,000", "representative": "Ro Khanna"},
  {"transaction_date": "2020-12-01", "type": "exchange",
   "amount": "$1,001 - $15,000", "representative": "Dan Crenshaw"},
  {"transaction_date": "2020-11-15", "ticker": "XOM", "type": "purchase",
   "amount": "N/A", "representative": "Dan Crenshaw"}
]"#;

pub const APOD_JSON: &str = r#"{
  "date": "2024-01-15",
  "explanation": "Stars are forming in the Eagle Nebula.",
  "media_type": "image",
  "service_version": "v1",
  "title": "Pillars of Creation",
  "url": "https://apod.nasa.gov/apod/image/2401/pillars.jpg"
}"#;

/// Hourly forecast body with `hours` samples starting at midnight. The
/// temperature at hour `h` is `base + h`; hour 3 is null upstream.
pub fn forecast_json(base: f64, hours: usize) -> String {
    let time: Vec<String> = (0..hours)
        .map(|h| format!("\"2024-01-{:02}T{:02}:00\"", 15 + h / 24, h % 24))
        .collect();
    let temps: Vec<String> = (0..hours)
        .map(|h| {
            if h == 3 {
                "null".to_string()
            } else {
                format!("{:.1}", base + h as f64)
            }
        })
        .collect();
    format!(
        r#"{{"latitude":0.0,"longitude":0.0,"timezone":"GMT","hourly_units":{{"time":"iso8601","temperature_2m":"°C"}},"hourly":{{"time":[{}],"temperature_2m":[{}]}}}}"#,
        time.join(","),
        temps.join(",")
    )
}
