use serde::Serialize;

/// One observation: current conditions or a single forecast hour.
///
/// Fields are private so a reading cannot change once the client built it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReading {
    temperature: f64,
    humidity: f64,
    wind_speed: f64,
    icon_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    condition_text: Option<String>,
}

impl WeatherReading {
    pub fn current(temperature: f64, humidity: f64, wind_speed: f64, icon_ref: String) -> Self {
        Self { temperature, humidity, wind_speed, icon_ref, timestamp: None, condition_text: None }
    }

    /// Forecast hours carry no humidity or wind figures.
    pub fn hourly(
        temperature: f64,
        icon_ref: String,
        timestamp: String,
        condition_text: String,
    ) -> Self {
        Self {
            temperature,
            humidity: 0.0,
            wind_speed: 0.0,
            icon_ref,
            timestamp: Some(timestamp),
            condition_text: Some(condition_text),
        }
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn humidity(&self) -> f64 {
        self.humidity
    }

    pub fn wind_speed(&self) -> f64 {
        self.wind_speed
    }

    /// Scheme-relative icon path as sent by the provider, e.g. `//cdn.weatherapi.com/...`.
    pub fn icon_ref(&self) -> &str {
        &self.icon_ref
    }

    pub fn icon_url(&self) -> String {
        format!("https:{}", self.icon_ref)
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    pub fn condition_text(&self) -> Option<&str> {
        self.condition_text.as_deref()
    }
}
