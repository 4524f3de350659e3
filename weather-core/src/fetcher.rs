//! Turns provider data for a city into a [`WeatherSnapshot`].

use crate::{
    background::city_background,
    error::FetchError,
    icon::resolve_icon,
    model::{City, CurrentConditions, WeatherSnapshot},
    provider::WeatherProvider,
    translate::translate,
};

/// Fetch current conditions for `city` and assemble the response payload.
pub async fn fetch_snapshot(
    provider: &dyn WeatherProvider,
    city: &City,
) -> Result<WeatherSnapshot, FetchError> {
    let current = provider.current_conditions(city).await?;
    log::info!("conditions for {}: {}", city.name, current.condition);
    Ok(build_snapshot(city, current))
}

/// Combine a city and its raw conditions into the response payload.
///
/// The icon is resolved from the raw condition text, not the translation.
pub fn build_snapshot(city: &City, current: CurrentConditions) -> WeatherSnapshot {
    let conditions = translate(&current.condition).to_string();
    let icon = resolve_icon(&current.condition).to_string();

    WeatherSnapshot {
        temperature: round_degrees(current.temperature_c),
        feels_like: round_degrees(current.feels_like_c),
        humidity: current.humidity,
        conditions,
        icon,
        city_name: city.name.clone(),
        country: city.country.clone(),
        country_code: city.country_code.to_lowercase(),
        city_photo: city_background(&city.name, &city.country),
    }
}

/// Nearest whole degree, ties to even.
fn round_degrees(value: f64) -> i64 {
    value.round_ties_even() as i64
}
