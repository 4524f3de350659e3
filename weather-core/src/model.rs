use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A city from the static dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub country: String,
    pub country_code: String,
    pub lat: f64,
    pub lon: f64,
}

/// Current conditions as reported by a provider, before localization.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    /// Kept as the provider's JSON value so integers stay integers and `null`
    /// stays `null` on the wire.
    pub humidity: Option<Number>,
    pub condition: String,
}

/// Response payload for one weather request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: i64,
    pub feels_like: i64,
    pub humidity: Option<Number>,
    pub conditions: String,
    pub icon: String,
    pub city_name: String,
    pub country: String,
    pub country_code: String,
    pub city_photo: String,
}
