//! Forecast shaping — built-in city table, geocoding result selection and
//! hourly series truncation.
//!
//! The wire types mirror the Open-Meteo forecast and geocoding responses.
//! Feeds deserialize into them; everything here is pure.

use phf::phf_map;
use serde::Deserialize;

use crate::error::{Result, WatchError};
use crate::types::{City, Coordinates, Forecast, HourlyPoint};

/// Built-in cities, keyed by lowercase name.
static BUILTIN: phf::Map<&'static str, (&'static str, f64, f64)> = phf_map! {
    "austin" => ("Austin", 30.2672, -97.7431),
    "dallas" => ("Dallas", 32.7767, -96.7970),
    "houston" => ("Houston", 29.7604, -95.3698),
};

/// Display order of the built-in city buttons.
pub const BUILTIN_CITY_NAMES: [&str; 3] = ["Austin", "Dallas", "Houston"];

/// Look up a built-in city, case-insensitively.
pub fn builtin_city(name: &str) -> Option<City> {
    BUILTIN
        .get(name.trim().to_lowercase().as_str())
        .map(|&(display, latitude, longitude)| City {
            name: display.to_string(),
            coordinates: Coordinates { latitude, longitude },
        })
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub hourly: HourlySeries,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HourlySeries {
    #[serde(default)]
    pub time: Vec<String>,
    /// Open-Meteo reports missing samples as `null`.
    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResponse {
    /// Absent entirely when nothing matched.
    #[serde(default)]
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
}

// ---------------------------------------------------------------------------
// Shaping
// ---------------------------------------------------------------------------

/// Keep the first `hours` samples of the series for `city`.
///
/// Samples whose temperature is `null` still count towards the window but
/// are not plotted.
pub fn take_hours(city: City, series: HourlySeries, hours: usize) -> Forecast {
    let points = series
        .time
        .into_iter()
        .zip(series.temperature_2m)
        .take(hours)
        .filter_map(|(time, celsius)| celsius.map(|celsius| HourlyPoint { time, celsius }))
        .collect();
    Forecast { city, points }
}

/// First geocoding hit for `query`, or [`WatchError::NotFound`].
///
/// The city keeps the name the user typed so its button label stays stable.
pub fn first_location(query: &str, response: GeocodingResponse) -> Result<City> {
    let hit = response
        .results
        .and_then(|r| r.into_iter().next())
        .ok_or_else(|| WatchError::no_city(query))?;
    tracing::debug!(query, resolved = %hit.name, country = ?hit.country, "geocoded city");
    Ok(City {
        name: query.to_string(),
        coordinates: Coordinates { latitude: hit.latitude, longitude: hit.longitude },
    })
}
