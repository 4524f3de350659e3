use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{Router, routing::get};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tower_http::services::ServeDir;
use weather_core::{City, CityRotator, WeatherProvider};

use crate::weather;

// Anything that goes in here must be a handle that can be cloned.
#[derive(Clone)]
pub struct AppState {
    pub rotator: Arc<Mutex<CityRotator>>,
    pub provider: Arc<dyn WeatherProvider>,
}

impl AppState {
    pub fn new(cities: Vec<City>, provider: Arc<dyn WeatherProvider>) -> Self {
        Self {
            rotator: Arc::new(Mutex::new(CityRotator::new(cities))),
            provider,
        }
    }
}

pub fn create_app(state: AppState, assets_path: &Path) -> Router {
    log::debug!("serving assets from {}", assets_path.display());

    Router::new()
        .route("/api/weather/random", get(weather::get_random_weather))
        .with_state(state)
        .fallback_service(ServeDir::new(assets_path))
        .layer(middleware::from_fn(log_request))
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    log::info!(
        "{} {} -> {} in {:?}",
        method,
        uri,
        response.status(),
        started.elapsed()
    );
    response
}
