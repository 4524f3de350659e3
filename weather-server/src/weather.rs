use axum::Json;
use axum::extract::State;
use weather_core::{WeatherSnapshot, fetch_snapshot};

use crate::app::AppState;
use crate::error::WeatherUnavailable;

/// `GET /api/weather/random`: weather for the next city in the rotation.
pub async fn get_random_weather(
    State(state): State<AppState>,
) -> Result<Json<WeatherSnapshot>, WeatherUnavailable> {
    // The lock is released before the provider call.
    let city = state
        .rotator
        .lock()
        .await
        .pick()
        .ok_or(WeatherUnavailable::NoCities)?;

    let snapshot = fetch_snapshot(state.provider.as_ref(), &city)
        .await
        .map_err(|source| WeatherUnavailable::Fetch {
            city: city.name.clone(),
            source,
        })?;

    Ok(Json(snapshot))
}
