//! Weather tab state: selected city, hourly forecast, picture of the day.
//!
//! The picture is requested once at startup and never refreshed; it has its
//! own error slot so a failure there leaves the forecast alone.

use crate::config::WeatherConfig;
use crate::error::WatchError;
use crate::forecast::{builtin_city, BUILTIN_CITY_NAMES};
use crate::types::{City, Forecast, PictureOfDay};

use super::{clean_name, contains_name, RequestToken, TokenIssuer};

#[derive(Debug, Clone)]
pub struct WeatherState {
    pub selected: Option<String>,
    pub builtin: Vec<String>,
    /// User-entered cities. Append-only.
    pub custom: Vec<String>,
    pub error: Option<String>,
    pub forecast: Option<Forecast>,
    pub loading: bool,
    pub picture: Option<PictureOfDay>,
    pub picture_error: Option<String>,
    pub forecast_hours: usize,
    startup_city: String,
    started: bool,
    tokens: TokenIssuer,
}

/// Where the forecast coordinates come from.
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastTarget {
    /// Built-in city with known coordinates.
    Known(City),
    /// Resolve through the geocoding feed first.
    Lookup(String),
}

impl ForecastTarget {
    /// Built-in cities resolve locally; everything else needs geocoding.
    pub fn for_name(name: &str) -> Self {
        match builtin_city(name) {
            Some(city) => ForecastTarget::Known(city),
            None => ForecastTarget::Lookup(name.trim().to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WeatherEvent {
    Startup,
    Select(String),
    AddCustom(String),
    Reload,
    ForecastLoaded {
        token: RequestToken,
        result: Result<Forecast, WatchError>,
    },
    PictureLoaded(Result<PictureOfDay, WatchError>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum WeatherEffect {
    FetchForecast {
        token: RequestToken,
        target: ForecastTarget,
        hours: usize,
    },
    FetchPicture,
}

impl WeatherState {
    pub fn new(config: &WeatherConfig) -> Self {
        Self {
            selected: None,
            builtin: BUILTIN_CITY_NAMES.iter().map(|s| s.to_string()).collect(),
            custom: Vec::new(),
            error: None,
            forecast: None,
            loading: false,
            picture: None,
            picture_error: None,
            forecast_hours: config.forecast_hours,
            startup_city: config.startup_city.clone(),
            started: false,
            tokens: TokenIssuer::default(),
        }
    }

    pub fn buttons(&self) -> impl Iterator<Item = &String> {
        self.builtin.iter().chain(self.custom.iter())
    }

    pub fn latest_token(&self) -> Option<RequestToken> {
        self.tokens.latest()
    }

    fn select(&mut self, name: String) -> WeatherEffect {
        let token = self.tokens.issue();
        let target = ForecastTarget::for_name(&name);
        tracing::debug!(city = %name, %token, ?target, "selecting city");
        self.error = None;
        self.loading = true;
        self.selected = Some(name);
        WeatherEffect::FetchForecast { token, target, hours: self.forecast_hours }
    }
}

impl Default for WeatherState {
    fn default() -> Self {
        Self::new(&WeatherConfig::default())
    }
}

/// Apply `event` to `state`, returning the new state and any I/O to run.
pub fn update(mut state: WeatherState, event: WeatherEvent) -> (WeatherState, Vec<WeatherEffect>) {
    match event {
        WeatherEvent::Startup => {
            if state.started {
                return (state, Vec::new());
            }
            state.started = true;
            let name = state.startup_city.clone();
            let forecast = state.select(name);
            (state, vec![forecast, WeatherEffect::FetchPicture])
        }

        WeatherEvent::Select(name) => {
            let effect = state.select(name);
            (state, vec![effect])
        }

        WeatherEvent::AddCustom(text) => match clean_name(&text) {
            None => {
                state.error = Some(WatchError::empty_city().to_string());
                state.forecast = None;
                (state, Vec::new())
            }
            Some(name) => {
                if !contains_name(state.buttons(), &name) {
                    state.custom.push(name.clone());
                }
                let effect = state.select(name);
                (state, vec![effect])
            }
        },

        WeatherEvent::Reload => match state.selected.clone() {
            Some(name) => {
                let effect = state.select(name);
                (state, vec![effect])
            }
            None => (state, Vec::new()),
        },

        WeatherEvent::ForecastLoaded { token, result } => {
            if !state.tokens.is_current(token) {
                tracing::debug!(%token, latest = ?state.tokens.latest(), "discarding stale forecast");
                return (state, Vec::new());
            }
            state.loading = false;
            match result {
                Ok(forecast) => {
                    tracing::info!(city = %forecast.city.name, points = forecast.points.len(), "forecast loaded");
                    state.forecast = Some(forecast);
                    state.error = None;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "forecast failed");
                    state.forecast = None;
                    state.error = Some(err.to_string());
                }
            }
            (state, Vec::new())
        }

        WeatherEvent::PictureLoaded(result) => {
            match result {
                Ok(picture) => {
                    tracing::info!(title = %picture.title, "picture of the day loaded");
                    state.picture = Some(picture);
                    state.picture_error = None;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "picture of the day failed");
                    state.picture = None;
                    state.picture_error = Some(err.to_string());
                }
            }
            (state, Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coordinates, HourlyPoint};

    fn fresh() -> WeatherState {
        WeatherState::new(&WeatherConfig::default())
    }

    fn forecast_for(name: &str) -> Forecast {
        Forecast {
            city: City {
                name: name.to_string(),
                coordinates: Coordinates { latitude: 0.0, longitude: 0.0 },
            },
            points: vec![HourlyPoint { time: "2024-01-15T00:00".into(), celsius: 4.0 }],
        }
    }

    fn token_of(effect: &WeatherEffect) -> RequestToken {
        match effect {
            WeatherEffect::FetchForecast { token, .. } => *token,
            WeatherEffect::FetchPicture => panic!("not a forecast effect"),
        }
    }

    #[test]
    fn startup_requests_forecast_and_picture_once() {
        let (s, effects) = update(fresh(), WeatherEvent::Startup);
        assert_eq!(effects.len(), 2);
        assert!(matches!(
            &effects[0],
            WeatherEffect::FetchForecast { target: ForecastTarget::Known(c), hours: 12, .. } if c.name == "Austin"
        ));
        assert_eq!(effects[1], WeatherEffect::FetchPicture);

        let (_, again) = update(s, WeatherEvent::Startup);
        assert!(again.is_empty());
    }

    #[test]
    fn unknown_city_is_geocoded() {
        let (s, effects) = update(fresh(), WeatherEvent::AddCustom(" Paris ".into()));
        assert_eq!(s.custom, vec!["Paris".to_string()]);
        assert!(matches!(
            &effects[0],
            WeatherEffect::FetchForecast { target: ForecastTarget::Lookup(n), .. } if n == "Paris"
        ));
    }

    #[test]
    fn builtin_city_typed_in_is_not_duplicated() {
        let (s, effects) = update(fresh(), WeatherEvent::AddCustom("dallas".into()));
        assert!(s.custom.is_empty());
        assert!(matches!(
            &effects[0],
            WeatherEffect::FetchForecast { target: ForecastTarget::Known(c), .. } if c.name == "Dallas"
        ));
    }

    #[test]
    fn blank_city_is_input_error() {
        let (s, effects) = update(fresh(), WeatherEvent::AddCustom("".into()));
        assert!(effects.is_empty());
        assert!(s.custom.is_empty());
        assert_eq!(s.error.as_deref(), Some("Please enter a valid city name."));
    }

    #[test]
    fn latest_forecast_wins() {
        let (s, a) = update(fresh(), WeatherEvent::Select("Austin".into()));
        let (s, b) = update(s, WeatherEvent::Select("Houston".into()));
        let (s, _) = update(
            s,
            WeatherEvent::ForecastLoaded { token: token_of(&b[0]), result: Ok(forecast_for("Houston")) },
        );
        let (s, _) = update(
            s,
            WeatherEvent::ForecastLoaded { token: token_of(&a[0]), result: Ok(forecast_for("Austin")) },
        );
        assert_eq!(s.forecast.unwrap().city.name, "Houston");
    }

    #[test]
    fn picture_failure_leaves_forecast() {
        let (s, effects) = update(fresh(), WeatherEvent::Startup);
        let (s, _) = update(
            s,
            WeatherEvent::ForecastLoaded { token: token_of(&effects[0]), result: Ok(forecast_for("Austin")) },
        );
        let (s, _) = update(s, WeatherEvent::PictureLoaded(Err(WatchError::fetch("Failed to fetch picture."))));
        assert!(s.forecast.is_some());
        assert_eq!(s.error, None);
        assert_eq!(s.picture_error.as_deref(), Some("Failed to fetch picture."));
    }

    #[test]
    fn forecast_failure_clears_forecast() {
        let (s, effects) = update(fresh(), WeatherEvent::Select("Atlantis".into()));
        let (s, _) = update(
            s,
            WeatherEvent::ForecastLoaded { token: token_of(&effects[0]), result: Err(WatchError::no_city("Atlantis")) },
        );
        assert!(s.forecast.is_none());
        assert!(s.error.unwrap().contains("Atlantis"));
    }
}
