use crate::{
    config::ProviderConfig,
    error::FetchError,
    model::{City, CurrentConditions},
    provider::visualcrossing::VisualCrossingProvider,
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod visualcrossing;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions at the city's coordinates.
    async fn current_conditions(&self, city: &City) -> Result<CurrentConditions, FetchError>;
}

/// Construct the provider described by `config`.
///
/// A missing API key is not an error here: the provider is still built and
/// reports [`FetchError::Configuration`] on every request, so the rest of the
/// service can run without credentials.
pub fn provider_from_config(config: &ProviderConfig) -> anyhow::Result<Arc<dyn WeatherProvider>> {
    let provider = VisualCrossingProvider::new(config)?;
    Ok(Arc::new(provider))
}
