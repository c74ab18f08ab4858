use crate::{Config, FetchError, WeatherSnapshot, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// A source of current weather conditions.
///
/// The trait exists so the query session can be driven by a scripted
/// implementation in tests; production code uses [`OpenWeatherProvider`].
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for a free-text location query.
    ///
    /// The query is forwarded as typed, including empty or whitespace-only
    /// strings: the provider's own answer decides the outcome.
    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, FetchError>;
}

/// Construct the provider with its credential injected from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No OpenWeatherMap API key configured.\n\
             Hint: run `panahon configure` and enter your API key, \
             or set the {} environment variable.",
            crate::config::API_KEY_ENV
        )
    })?;

    Ok(Box::new(OpenWeatherProvider::new(api_key)))
}
