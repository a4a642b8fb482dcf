//! Open-Meteo forecast and geocoding feeds.

use watchboard_core::error::Result;
use watchboard_core::forecast::{GeocodingResponse, HourlySeries, ForecastResponse};
use watchboard_core::Coordinates;

use crate::http::HttpClient;
use crate::{ForecastSource, GeocodingSource};

pub struct OpenMeteo {
    http: HttpClient,
    forecast_url: String,
    geocoding_url: String,
}

impl OpenMeteo {
    pub fn new(
        http: HttpClient,
        forecast_url: impl Into<String>,
        geocoding_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            forecast_url: forecast_url.into(),
            geocoding_url: geocoding_url.into(),
        }
    }
}

impl ForecastSource for OpenMeteo {
    async fn hourly(&self, at: Coordinates) -> Result<HourlySeries> {
        let query = [
            ("latitude", at.latitude.to_string()),
            ("longitude", at.longitude.to_string()),
            ("hourly", "temperature_2m".to_string()),
            ("timezone", "auto".to_string()),
        ];
        let response: ForecastResponse =
            self.http.get_json(&self.forecast_url, &query, "forecast").await?;
        Ok(response.hourly)
    }
}

impl GeocodingSource for OpenMeteo {
    async fn search(&self, name: &str) -> Result<GeocodingResponse> {
        let query = [
            ("name", name.to_string()),
            ("count", "1".to_string()),
            ("language", "en".to_string()),
            ("format", "json".to_string()),
        ];
        self.http.get_json(&self.geocoding_url, &query, "location").await
    }
}
