use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use weather_core::FetchError;

/// Shown to clients for every failure; the cause is only logged.
pub const UNAVAILABLE_MESSAGE: &str = "Не удалось получить данные о погоде";

/// A weather request that could not be answered.
#[derive(Debug)]
pub enum WeatherUnavailable {
    NoCities,
    Fetch { city: String, source: FetchError },
}

impl IntoResponse for WeatherUnavailable {
    fn into_response(self) -> Response {
        match &self {
            WeatherUnavailable::NoCities => log::error!("no cities to pick from"),
            WeatherUnavailable::Fetch { city, source } if source.is_transient() => {
                log::warn!("transient failure fetching weather for {city}: {source}")
            }
            WeatherUnavailable::Fetch { city, source } => {
                log::error!("failed to fetch weather for {city}: {source}")
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": UNAVAILABLE_MESSAGE })),
        )
            .into_response()
    }
}
