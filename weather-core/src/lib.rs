//! Core library for the random city weather service.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The weather provider abstraction and its Visual Crossing client
//! - Condition translation, icon resolution and per-city backgrounds
//! - The city dataset and the no-repeat city rotator
//!
//! It is used by `weather-server`, but has no dependency on any web framework.

pub mod background;
pub mod cities;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod icon;
pub mod model;
pub mod provider;
pub mod rotator;
pub mod translate;

pub use cities::load_cities;
pub use config::{Config, ProviderConfig};
pub use error::{CityDataError, FetchError};
pub use fetcher::fetch_snapshot;
pub use model::{City, CurrentConditions, WeatherSnapshot};
pub use provider::{WeatherProvider, provider_from_config};
pub use rotator::CityRotator;
