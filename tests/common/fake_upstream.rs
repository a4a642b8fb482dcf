//! Fake upstream REST server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves:
//! - `GET /data/all_transactions.json` — [`TRANSACTIONS_JSON`]
//! - `GET /v1/forecast` — 48 hourly samples; temperatures start at the
//!   requested latitude
//! - `GET /v1/search` — one hit at (48.85, 2.35), none for `Atlantis`
//! - `GET /planetary/apod` — [`APOD_JSON`], 403 without `api_key`
//! - `GET /broken` — HTTP 500
//! - `GET /garbage` — 200 with a body that is not JSON
//!
//! Every request path is recorded so tests can assert what was (not) called.
//!
//! # Example
//!
//! ```rust,ignore
//! let upstream = FakeUpstream::start().await.unwrap();
//! let feed = HouseStockFeed::new(client, upstream.url("/data/all_transactions.json"));
//! assert_eq!(upstream.hits("/data/all_transactions.json").await, 1);
//! ```

use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use super::fixtures::{forecast_json, APOD_JSON, TRANSACTIONS_JSON};

type Hits = Arc<Mutex<Vec<String>>>;

/// Handle to the running fake upstream server.
pub struct FakeUpstream {
    addr: SocketAddr,
    hits: Hits,
}

impl FakeUpstream {
    /// Start the server on a random port. Returns once it is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let hits: Hits = Arc::default();

        let app = Router::new()
            .route("/data/all_transactions.json", get(transactions))
            .route("/v1/forecast", get(forecast))
            .route("/v1/search", get(search))
            .route("/planetary/apod", get(apod))
            .route("/broken", get(broken))
            .route("/garbage", get(garbage))
            .layer(axum::middleware::from_fn_with_state(hits.clone(), record))
            .with_state(hits.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, hits })
    }

    /// Base URL (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Absolute URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// How many requests hit `path` so far.
    pub async fn hits(&self, path: &str) -> usize {
        self.hits.lock().await.iter().filter(|p| p.as_str() == path).count()
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn record(
    State(hits): State<Hits>,
    uri: Uri,
    request: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    hits.lock().await.push(uri.path().to_string());
    next.run(request).await
}

fn json(body: String) -> impl IntoResponse {
    ([(axum::http::header::CONTENT_TYPE, "application/json")], body)
}

async fn transactions() -> impl IntoResponse {
    json(TRANSACTIONS_JSON.to_string())
}

async fn forecast(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    let base = params
        .get("latitude")
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(0.0);
    json(forecast_json(base, 48))
}

async fn search(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    let name = params.get("name").cloned().unwrap_or_default();
    if name.eq_ignore_ascii_case("atlantis") {
        return json(r#"{"generationtime_ms":0.2}"#.to_string());
    }
    json(format!(
        r#"{{"results":[{{"id":2988507,"name":"{name}","latitude":48.85,"longitude":2.35,"country":"France"}}]}}"#
    ))
}

async fn apod(Query(params): Query<HashMap<String, String>>) -> axum::response::Response {
    if !params.contains_key("api_key") {
        return (StatusCode::FORBIDDEN, "API_KEY_MISSING").into_response();
    }
    json(APOD_JSON.to_string()).into_response()
}

async fn broken() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded")
}

async fn garbage() -> impl IntoResponse {
    json("<html>definitely not json</html>".to_string())
}
