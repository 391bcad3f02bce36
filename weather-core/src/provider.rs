use crate::{
    Config, FetchError, UnitPreference, WeatherReading, provider::weatherapi::WeatherClient,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

/// The three calls the UI layer makes against a weather service.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// `true` only when the provider answered 200 without an `error` object.
    /// Failures are logged and collapse to `false`.
    async fn validate_location(&self, location: &str) -> bool;

    async fn fetch_current(
        &self,
        location: &str,
        units: &UnitPreference,
    ) -> Result<WeatherReading, FetchError>;

    /// Hourly readings for today in chronological order, at most 24.
    async fn fetch_hourly_forecast(&self, location: &str) -> Result<Vec<WeatherReading>, FetchError>;
}

/// Construct the WeatherAPI.com client from config.
pub fn client_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    client_with_key(config, config.api_key())
}

fn client_with_key(
    config: &Config,
    api_key: Option<String>,
) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = api_key.ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
                 Hint: run `weather configure` or set WEATHER_API_KEY."
        )
    })?;

    let client = WeatherClient::with_base_url(api_key, config.base_url.clone(), config.timeout())?
        .with_forecast_unit(config.forecast_temperature_unit);

    Ok(Box::new(client))
}
