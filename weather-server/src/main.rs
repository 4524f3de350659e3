//! Binary crate for the random city weather web service.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and loading configuration
//! - Wiring the city rotator and weather provider into shared state
//! - Serving the JSON endpoint and the static front end

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use weather_core::{load_cities, provider_from_config};

mod app;
mod cli;
mod error;
mod weather;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = cli::Cli::parse();
    let config = cli.load_config()?;
    if !config.has_api_key() {
        log::warn!("no weather API key configured; /api/weather/random will return 500");
    }

    let cities = load_cities(&config.cities_path).context("Failed to load city dataset")?;
    let provider = provider_from_config(&config.provider)
        .context("Failed to create weather provider")?;

    let state = app::AppState::new(cities, provider);
    let app = app::create_app(state, &config.assets_path);

    let listener = TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen))?;
    log::info!("listening on {}", config.listen);

    axum::serve(listener, app).await?;
    Ok(())
}
