use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, warn};

use crate::{
    config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS},
    error::FetchError,
    model::WeatherReading,
    units::{TemperatureUnit, UnitPreference},
};

use super::WeatherProvider;

/// The provider serves one day of hourly entries per `days=1` request.
const HOURS_PER_DAY: usize = 24;

/// Client for WeatherAPI.com.
///
/// Every operation is a single request: no retries, no caching, and idle
/// connections are not kept, so each call opens its own connection.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    base_url: String,
    forecast_unit: TemperatureUnit,
    http: Client,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Result<Self, FetchError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_base_url(
        api_key: String,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| FetchError::Transport(e.without_url()))?;

        Ok(Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            forecast_unit: TemperatureUnit::Celsius,
            http,
        })
    }

    /// Unit for hourly forecast temperatures. Defaults to Celsius whatever
    /// the caller's `UnitPreference` says.
    pub fn with_forecast_unit(mut self, unit: TemperatureUnit) -> Self {
        self.forecast_unit = unit;
        self
    }

    pub fn forecast_unit(&self) -> TemperatureUnit {
        self.forecast_unit
    }

    /// Like `validate_location`, but keeps the reason a location was refused.
    pub async fn check_location(&self, location: &str) -> Result<(), FetchError> {
        let body = self.get("current.json", location, Some(1)).await?;
        decode::<Value>(&body, "current")?;
        Ok(())
    }

    async fn get(
        &self,
        endpoint: &str,
        location: &str,
        days: Option<u8>,
    ) -> Result<String, FetchError> {
        let q = format_location(location)
            .ok_or_else(|| FetchError::InvalidLocation("location is empty".to_string()))?;

        let mut query = vec![("key", self.api_key.clone()), ("q", q)];
        if let Some(days) = days {
            query.push(("days", days.to_string()));
        }

        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, location, "requesting weather data");

        // reqwest errors carry the full URL, API key included.
        let res = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.without_url()))?;

        let status = res.status();
        let body = res.text().await.map_err(|e| FetchError::Transport(e.without_url()))?;

        if status != StatusCode::OK {
            return Err(FetchError::http(status.as_u16(), &body));
        }

        Ok(body)
    }
}

/// Multi-word place names use underscores in the `q` parameter; reqwest
/// percent-encodes whatever else needs it.
fn format_location(location: &str) -> Option<String> {
    let trimmed = location.trim();
    if trimmed.is_empty() {
        return None;
    }

    Some(trimmed.chars().map(|c| if c.is_whitespace() { '_' } else { c }).collect())
}

/// Decode a 200 body, treating a top-level `error` object as an unknown location.
fn decode<T: DeserializeOwned>(body: &str, what: &str) -> Result<T, FetchError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| FetchError::Parse(format!("{what} response is not valid JSON: {e}")))?;

    if !value.is_object() {
        return Err(FetchError::Parse(format!("{what} response is not a JSON object")));
    }

    if let Some(error) = value.get("error") {
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("provider reported an error");
        return Err(FetchError::InvalidLocation(message.to_string()));
    }

    serde_json::from_value(value).map_err(|e| FetchError::Parse(format!("{what} response: {e}")))
}

fn number_field(fields: &Map<String, Value>, scope: &str, name: &str) -> Result<f64, FetchError> {
    fields
        .get(name)
        .and_then(Value::as_f64)
        .ok_or_else(|| FetchError::Parse(format!("{scope}.{name} is missing or not a number")))
}

#[derive(Debug, Deserialize)]
struct WaIcon {
    icon: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    icon: String,
    text: String,
}

/// Unit-dependent fields (`temp_c`, `wind_mph`, ...) stay in `fields` and are
/// picked by name at parse time.
#[derive(Debug, Deserialize)]
struct WaCurrent {
    humidity: f64,
    condition: WaIcon,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    current: WaCurrent,
}

#[derive(Debug, Deserialize)]
struct WaForecastHour {
    time: String,
    condition: WaCondition,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct WaForecastDay {
    hour: Vec<WaForecastHour>,
}

#[derive(Debug, Deserialize)]
struct WaForecast {
    forecastday: Vec<WaForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WaForecastResponse {
    forecast: WaForecast,
}

fn parse_current(body: &str, units: &UnitPreference) -> Result<WeatherReading, FetchError> {
    let parsed: WaResponse = decode(body, "current")?;
    let current = parsed.current;

    let temperature = number_field(&current.fields, "current", units.temperature_field_name())?;
    let wind_speed = number_field(&current.fields, "current", units.wind_field_name())?;

    Ok(WeatherReading::current(temperature, current.humidity, wind_speed, current.condition.icon))
}

fn parse_forecast(body: &str, unit: TemperatureUnit) -> Result<Vec<WeatherReading>, FetchError> {
    let parsed: WaForecastResponse = decode(body, "forecast")?;

    let day = parsed
        .forecast
        .forecastday
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::Parse("forecast contained no forecastday data".to_string()))?;

    day.hour
        .into_iter()
        .take(HOURS_PER_DAY)
        .map(|hour| -> Result<WeatherReading, FetchError> {
            let temperature = number_field(&hour.fields, "hour", unit.field_name())?;
            Ok(WeatherReading::hourly(
                temperature,
                hour.condition.icon,
                hour.time,
                hour.condition.text,
            ))
        })
        .collect()
}

#[async_trait]
impl WeatherProvider for WeatherClient {
    async fn validate_location(&self, location: &str) -> bool {
        match self.check_location(location).await {
            Ok(()) => true,
            Err(err) => {
                warn!(location, kind = %err.kind(), error = %err, "location validation failed");
                false
            }
        }
    }

    async fn fetch_current(
        &self,
        location: &str,
        units: &UnitPreference,
    ) -> Result<WeatherReading, FetchError> {
        let result = match self.get("current.json", location, None).await {
            Ok(body) => parse_current(&body, units),
            Err(err) => Err(err),
        };

        if let Err(err) = &result {
            warn!(location, kind = %err.kind(), error = %err, "failed to fetch weather data");
        }
        result
    }

    async fn fetch_hourly_forecast(&self, location: &str) -> Result<Vec<WeatherReading>, FetchError> {
        let result = match self.get("forecast.json", location, Some(1)).await {
            Ok(body) => parse_forecast(&body, self.forecast_unit),
            Err(err) => Err(err),
        };

        match &result {
            Ok(hours) => debug!(location, hours = hours.len(), "parsed hourly forecast"),
            Err(err) => {
                warn!(location, kind = %err.kind(), error = %err, "failed to fetch forecast data")
            }
        }
        result
    }
}
