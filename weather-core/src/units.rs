use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        }
    }

    pub const fn all() -> &'static [TemperatureUnit] {
        &[TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit]
    }

    /// WeatherAPI.com field carrying a temperature in this unit.
    pub fn field_name(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "temp_c",
            TemperatureUnit::Fahrenheit => "temp_f",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemperatureUnit {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "celsius" | "c" => Ok(TemperatureUnit::Celsius),
            "fahrenheit" | "f" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(anyhow::anyhow!(
                "Unknown temperature unit '{value}'. Supported units: celsius, fahrenheit."
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindSpeedUnit {
    #[default]
    Kph,
    Mph,
}

impl WindSpeedUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindSpeedUnit::Kph => "kph",
            WindSpeedUnit::Mph => "mph",
        }
    }

    pub const fn all() -> &'static [WindSpeedUnit] {
        &[WindSpeedUnit::Kph, WindSpeedUnit::Mph]
    }

    /// WeatherAPI.com field carrying a wind speed in this unit.
    pub fn field_name(&self) -> &'static str {
        match self {
            WindSpeedUnit::Kph => "wind_kph",
            WindSpeedUnit::Mph => "wind_mph",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WindSpeedUnit::Kph => "Kph",
            WindSpeedUnit::Mph => "Mph",
        }
    }
}

impl fmt::Display for WindSpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindSpeedUnit {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "kph" | "kmh" => Ok(WindSpeedUnit::Kph),
            "mph" => Ok(WindSpeedUnit::Mph),
            _ => Err(anyhow::anyhow!("Unknown wind speed unit '{value}'. Supported units: kph, mph.")),
        }
    }
}

/// Units the user wants readings in.
///
/// Owned by the caller and passed into every operation that needs it; the
/// client only ever reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnitPreference {
    #[serde(default)]
    pub temperature: TemperatureUnit,
    #[serde(default)]
    pub wind_speed: WindSpeedUnit,
}

impl UnitPreference {
    pub fn new(temperature: TemperatureUnit, wind_speed: WindSpeedUnit) -> Self {
        Self { temperature, wind_speed }
    }

    pub fn temperature_field_name(&self) -> &'static str {
        self.temperature.field_name()
    }

    pub fn wind_field_name(&self) -> &'static str {
        self.wind_speed.field_name()
    }

    pub fn temperature_symbol(&self) -> &'static str {
        self.temperature.symbol()
    }

    pub fn wind_speed_label(&self) -> &'static str {
        self.wind_speed.label()
    }
}
