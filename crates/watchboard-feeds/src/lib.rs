//! watchboard-feeds — upstream REST adapters for watchboard.
//!
//! Each adapter fetches one public JSON endpoint. The traits below are the
//! seams the UI shell and the headless CLI program against, so tests can
//! swap in canned sources. [`pipeline`] glues a fetch to the matching
//! core transformation.

use std::future::Future;
use std::time::Duration;

use watchboard_core::config::EndpointsConfig;
use watchboard_core::error::Result;
use watchboard_core::forecast::{GeocodingResponse, HourlySeries};
use watchboard_core::{Coordinates, PictureOfDay, TransactionRecord};

pub mod apod;
pub mod http;
pub mod pipeline;
pub mod stocks;
pub mod weather;

pub use apod::ApodFeed;
pub use http::HttpClient;
pub use stocks::HouseStockFeed;
pub use weather::OpenMeteo;

/// The complete disclosure feed.
pub trait TransactionSource: Send + Sync {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<TransactionRecord>>> + Send;
}

/// Hourly temperatures for a coordinate.
pub trait ForecastSource: Send + Sync {
    fn hourly(&self, at: Coordinates) -> impl Future<Output = Result<HourlySeries>> + Send;
}

/// City name → candidate locations.
pub trait GeocodingSource: Send + Sync {
    fn search(&self, name: &str) -> impl Future<Output = Result<GeocodingResponse>> + Send;
}

/// Today's astronomy picture.
pub trait PictureSource: Send + Sync {
    fn today(&self) -> impl Future<Output = Result<PictureOfDay>> + Send;
}

/// Every live feed, built from the `[endpoints]` config section.
pub struct Feeds {
    pub stocks: HouseStockFeed,
    pub weather: OpenMeteo,
    pub apod: ApodFeed,
}

impl Feeds {
    pub fn from_config(endpoints: &EndpointsConfig) -> Result<Self> {
        let http = HttpClient::new(Duration::from_secs(endpoints.timeout_secs))?;
        Ok(Self {
            stocks: HouseStockFeed::new(http.clone(), &endpoints.transactions),
            weather: OpenMeteo::new(http.clone(), &endpoints.forecast, &endpoints.geocoding),
            apod: ApodFeed::new(http, &endpoints.apod, &endpoints.apod_api_key),
        })
    }
}
