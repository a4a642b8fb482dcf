//! Fetch-then-transform cycles, and the effect runners the UI shell spawns.
//!
//! Every cycle is all-or-nothing: the first error aborts it and is returned
//! as-is for the view state to display.

use watchboard_core::error::Result;
use watchboard_core::forecast::{first_location, take_hours};
use watchboard_core::normalizer::normalize;
use watchboard_core::state::{ForecastTarget, StocksEffect, StocksEvent, WeatherEffect, WeatherEvent};
use watchboard_core::{Forecast, NormalizedTransaction, PictureOfDay};

use crate::{ForecastSource, GeocodingSource, PictureSource, TransactionSource};

/// Download the whole feed and normalize it for `representative`.
pub async fn load_transactions<S: TransactionSource>(
    source: &S,
    representative: &str,
) -> Result<Vec<NormalizedTransaction>> {
    let records = source.fetch_all().await?;
    normalize(&records, representative)
}

/// Resolve the target's coordinates if needed, then fetch and truncate its
/// hourly forecast.
pub async fn load_forecast<F, G>(
    forecast: &F,
    geocoder: &G,
    target: ForecastTarget,
    hours: usize,
) -> Result<Forecast>
where
    F: ForecastSource,
    G: GeocodingSource,
{
    let city = match target {
        ForecastTarget::Known(city) => city,
        ForecastTarget::Lookup(name) => {
            let response = geocoder.search(&name).await?;
            first_location(&name, response)?
        }
    };
    let series = forecast.hourly(city.coordinates).await?;
    Ok(take_hours(city, series, hours))
}

pub async fn load_picture<P: PictureSource>(source: &P) -> Result<PictureOfDay> {
    source.today().await
}

/// Run a stocks effect to completion and turn the outcome into an event.
pub async fn run_stocks_effect<S: TransactionSource>(source: &S, effect: StocksEffect) -> StocksEvent {
    match effect {
        StocksEffect::FetchTransactions { token, representative } => {
            let result = load_transactions(source, &representative).await;
            StocksEvent::Loaded { token, result }
        }
    }
}

/// Run a weather effect to completion and turn the outcome into an event.
pub async fn run_weather_effect<F, G, P>(
    forecast: &F,
    geocoder: &G,
    picture: &P,
    effect: WeatherEffect,
) -> WeatherEvent
where
    F: ForecastSource,
    G: GeocodingSource,
    P: PictureSource,
{
    match effect {
        WeatherEffect::FetchForecast { token, target, hours } => {
            let result = load_forecast(forecast, geocoder, target, hours).await;
            WeatherEvent::ForecastLoaded { token, result }
        }
        WeatherEffect::FetchPicture => WeatherEvent::PictureLoaded(load_picture(picture).await),
    }
}
