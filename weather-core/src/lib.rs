//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Unit preferences and the readings produced from provider JSON
//! - The WeatherAPI.com client behind the `WeatherProvider` trait
//! - Search history and the validate-then-fetch search flow
//! - Day-part selection for background assets
//! - Configuration & credentials handling
//!
//! It is used by `weather-cli`, but can also be driven by any other front end.

pub mod config;
pub mod daypart;
pub mod error;
pub mod history;
pub mod model;
pub mod provider;
pub mod search;
pub mod units;

pub use config::Config;
pub use daypart::Daypart;
pub use error::{FailureKind, FetchError};
pub use history::{SearchEntry, SearchHistory};
pub use model::WeatherReading;
pub use provider::{WeatherProvider, client_from_config, weatherapi::WeatherClient};
pub use search::{HistoryPolicy, SearchOutcome, SearchSession};
pub use units::{TemperatureUnit, UnitPreference, WindSpeedUnit};
