use crate::{Config, WeatherObservation, error::FetchError, provider::openweather::OpenWeatherClient};
use async_trait::async_trait;
use std::{fmt::Debug, time::Duration};

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for `city`. One request, no retries.
    async fn current(&self, city: &str) -> Result<WeatherObservation, FetchError>;
}

/// Construct the OpenWeather client from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key()?;
    let timeout = Duration::from_secs(config.timeout_secs());

    let client = OpenWeatherClient::new(api_key.to_owned(), timeout)?;
    Ok(Box::new(client))
}
