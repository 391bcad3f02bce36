use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::units::{TemperatureUnit, UnitPreference};

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable that takes precedence over the stored API key.
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// timeout_secs = 10
///
/// [units]
/// temperature = "celsius"
/// wind_speed = "kph"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    pub base_url: String,

    pub timeout_secs: u64,

    /// Unit used for hourly forecast temperatures, independent of `units`.
    pub forecast_temperature_unit: TemperatureUnit,

    /// Whether a search rejected by location validation still lands in history.
    pub record_rejected_searches: bool,

    /// Units the CLI starts with when no flag overrides them.
    pub units: UnitPreference,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            forecast_temperature_unit: TemperatureUnit::Celsius,
            record_rejected_searches: false,
            units: UnitPreference::default(),
        }
    }
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// API key from `WEATHER_API_KEY`, falling back to the stored one.
    pub fn api_key(&self) -> Option<String> {
        self.resolve_api_key(std::env::var(API_KEY_ENV).ok())
    }

    fn resolve_api_key(&self, from_env: Option<String>) -> Option<String> {
        from_env
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|key| !key.trim().is_empty()))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// A zero timeout would fail every request, so it means "use the default".
    pub fn timeout(&self) -> Duration {
        match self.timeout_secs {
            0 => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            secs => Duration::from_secs(secs),
        }
    }
}
