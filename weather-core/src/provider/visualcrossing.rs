use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Number;

use crate::{
    config::ProviderConfig,
    error::FetchError,
    model::{City, CurrentConditions},
};

use super::WeatherProvider;

/// Client for the Visual Crossing timeline API.
#[derive(Debug, Clone)]
pub struct VisualCrossingProvider {
    api_key: Option<String>,
    base_url: String,
    language: String,
    unit_group: String,
    http: Client,
}

impl VisualCrossingProvider {
    pub fn new(config: &ProviderConfig) -> reqwest::Result<Self> {
        let http = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            api_key: config.api_key().map(str::to_owned),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            language: config.language.clone(),
            unit_group: config.unit_group.clone(),
            http,
        })
    }

    fn timeline_url(&self, city: &City) -> String {
        format!("{}/{},{}", self.base_url, city.lat, city.lon)
    }
}

#[async_trait]
impl WeatherProvider for VisualCrossingProvider {
    async fn current_conditions(&self, city: &City) -> Result<CurrentConditions, FetchError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(FetchError::Configuration);
        };

        log::info!("requesting weather for {}", city.name);

        let res = self
            .http
            .get(self.timeline_url(city))
            .query(&[
                ("unitGroup", self.unit_group.as_str()),
                ("key", api_key),
                ("contentType", "json"),
                ("lang", self.language.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        parse_timeline(status, &body)
    }
}

#[derive(Debug, Deserialize)]
struct VcTimeline {
    #[serde(rename = "currentConditions")]
    current_conditions: Option<VcCurrentConditions>,
}

#[derive(Debug, Deserialize)]
struct VcCurrentConditions {
    temp: f64,
    feelslike: f64,
    // Required, but may be null.
    #[serde(deserialize_with = "Option::deserialize")]
    humidity: Option<Number>,
    conditions: Option<String>,
}

/// Interpret a timeline response. Only `200 OK` is accepted.
fn parse_timeline(status: StatusCode, body: &str) -> Result<CurrentConditions, FetchError> {
    if status != StatusCode::OK {
        log::warn!(
            "Visual Crossing request failed with status {}: {}",
            status,
            truncate_body(body)
        );
        return Err(FetchError::Provider {
            status: status.as_u16(),
        });
    }

    let timeline: VcTimeline = serde_json::from_str(body)?;
    let current = timeline
        .current_conditions
        .ok_or_else(|| FetchError::DataShape("response has no currentConditions".to_string()))?;

    Ok(CurrentConditions {
        temperature_c: current.temp,
        feels_like_c: current.feelslike,
        humidity: current.humidity,
        condition: current.conditions.unwrap_or_else(|| "Unknown".to_string()),
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, extract::Query, http::Uri};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    type Recorded = Arc<Mutex<Vec<(String, HashMap<String, String>)>>>;

    fn moscow() -> City {
        City {
            name: "Moscow".into(),
            country: "Russia".into(),
            country_code: "RU".into(),
            lat: 55.7558,
            lon: 37.6173,
        }
    }

    /// Serve `body` with `status` on a loopback port, recording every request's
    /// path and query. Returns the provider pointed at it.
    async fn stub_server(
        status: StatusCode,
        body: &'static str,
    ) -> (VisualCrossingProvider, Recorded) {
        let recorded = Recorded::default();
        let requests = recorded.clone();
        let app = Router::new().fallback(
            move |uri: Uri, Query(params): Query<HashMap<String, String>>| {
                let requests = requests.clone();
                async move {
                    requests.lock().unwrap().push((uri.path().to_string(), params));
                    (status, body)
                }
            },
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        let cfg = ProviderConfig {
            api_key: Some("KEY".into()),
            base_url: format!("http://{addr}/timeline"),
            ..ProviderConfig::default()
        };
        (VisualCrossingProvider::new(&cfg).expect("client"), recorded)
    }

    #[tokio::test]
    async fn request_carries_coordinates_and_query() {
        let (provider, recorded) = stub_server(StatusCode::OK, VALID_BODY).await;

        let current = provider.current_conditions(&moscow()).await.expect("conditions");
        assert_eq!(current.condition, "Light rain");

        let requests = recorded.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let (path, params) = &requests[0];
        assert_eq!(path, "/timeline/55.7558,37.6173");
        assert_eq!(params["unitGroup"], "metric");
        assert_eq!(params["key"], "KEY");
        assert_eq!(params["contentType"], "json");
        assert_eq!(params["lang"], "ru");
    }

    #[tokio::test]
    async fn not_found_from_server_is_provider_error() {
        let (provider, _) = stub_server(StatusCode::NOT_FOUND, "Not found").await;

        let err = provider.current_conditions(&moscow()).await.unwrap_err();
        assert!(matches!(err, FetchError::Provider { status: 404 }));
    }

    #[tokio::test]
    async fn server_body_without_current_conditions_is_data_shape_error() {
        let (provider, _) = stub_server(StatusCode::OK, r#"{"days": []}"#).await;

        let err = provider.current_conditions(&moscow()).await.unwrap_err();
        assert!(matches!(err, FetchError::DataShape(_)));
    }

    const VALID_BODY: &str = r#"{
        "latitude": 55.7558,
        "longitude": 37.6173,
        "currentConditions": {
            "datetime": "14:00:00",
            "temp": 12.6,
            "feelslike": 11.4,
            "humidity": 81,
            "conditions": "Light rain"
        }
    }"#;

    #[test]
    fn parses_current_conditions() {
        let current = parse_timeline(StatusCode::OK, VALID_BODY).expect("valid body");

        assert_eq!(current.temperature_c, 12.6);
        assert_eq!(current.feels_like_c, 11.4);
        assert_eq!(current.humidity, Some(Number::from(81)));
        assert_eq!(current.condition, "Light rain");
    }

    #[test]
    fn missing_conditions_text_becomes_unknown() {
        let body = r#"{"currentConditions": {"temp": 1.0, "feelslike": -2.0, "humidity": 90.5}}"#;
        let current = parse_timeline(StatusCode::OK, body).expect("valid body");
        assert_eq!(current.condition, "Unknown");
        assert_eq!(current.humidity.and_then(|h| h.as_f64()), Some(90.5));
    }

    #[test]
    fn null_conditions_text_becomes_unknown() {
        let body = r#"{"currentConditions": {"temp": 1.0, "feelslike": -2.0, "humidity": 70, "conditions": null}}"#;
        let current = parse_timeline(StatusCode::OK, body).expect("valid body");
        assert_eq!(current.condition, "Unknown");
    }

    #[test]
    fn null_humidity_passes_through() {
        let body = r#"{"currentConditions": {"temp": 5.2, "feelslike": 3.1, "humidity": null, "conditions": "Clear"}}"#;
        let current = parse_timeline(StatusCode::OK, body).expect("null humidity is allowed");
        assert_eq!(current.humidity, None);
        assert_eq!(current.condition, "Clear");
    }

    #[test]
    fn missing_humidity_is_data_shape_error() {
        let body = r#"{"currentConditions": {"temp": 5.2, "feelslike": 3.1, "conditions": "Clear"}}"#;
        let err = parse_timeline(StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, FetchError::DataShape(_)));
    }

    #[test]
    fn non_ok_status_is_provider_error() {
        for status in [StatusCode::NOT_FOUND, StatusCode::INTERNAL_SERVER_ERROR] {
            let err = parse_timeline(status, "Bad API key").unwrap_err();
            assert!(matches!(err, FetchError::Provider { status: s } if s == status.as_u16()));
        }
    }

    #[test]
    fn missing_current_conditions_is_data_shape_error() {
        let err = parse_timeline(StatusCode::OK, r#"{"days": []}"#).unwrap_err();
        assert!(matches!(err, FetchError::DataShape(_)));
    }

    #[test]
    fn wrongly_typed_field_is_data_shape_error() {
        let body = r#"{"currentConditions": {"temp": "warm", "feelslike": 1.0, "humidity": 50}}"#;
        let err = parse_timeline(StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, FetchError::DataShape(_)));
    }

    #[test]
    fn malformed_json_is_transient() {
        let err = parse_timeline(StatusCode::OK, "<html>oops</html>").unwrap_err();
        assert!(err.is_transient());
    }

    #[test]
    fn timeline_url_uses_coordinates() {
        let cfg = ProviderConfig {
            api_key: Some("KEY".into()),
            base_url: "https://example.test/timeline/".into(),
            ..ProviderConfig::default()
        };
        let provider = VisualCrossingProvider::new(&cfg).expect("client");

        assert_eq!(
            provider.timeline_url(&moscow()),
            "https://example.test/timeline/55.7558,37.6173"
        );
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "ж".repeat(300);
        let truncated = truncate_body(&body);
        assert_eq!(truncated.chars().count(), 203);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncate_body("short"), "short");
    }
}
