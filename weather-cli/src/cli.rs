use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, Select, Text};
use serde_json::json;
use weather_core::{
    Config, Daypart, SearchOutcome, SearchSession, TemperatureUnit, UnitPreference, WindSpeedUnit,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Per-invocation overrides of the configured units.
#[derive(Debug, Clone, clap::Args)]
pub struct UnitArgs {
    /// Temperature unit: celsius or fahrenheit.
    #[arg(long, value_name = "UNIT")]
    pub temp_unit: Option<TemperatureUnit>,

    /// Wind speed unit: kph or mph.
    #[arg(long, value_name = "UNIT")]
    pub wind_unit: Option<WindSpeedUnit>,
}

impl UnitArgs {
    fn resolve(&self, config: &Config) -> UnitPreference {
        UnitPreference::new(
            self.temp_unit.unwrap_or(config.units.temperature),
            self.wind_unit.unwrap_or(config.units.wind_speed),
        )
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key and default units.
    Configure,

    /// Show current weather and today's hourly forecast for a location.
    Show {
        /// Location name, e.g. "London" or "New York".
        location: String,

        #[command(flatten)]
        units: UnitArgs,

        /// Print the outcome as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Search repeatedly and keep a history for this session.
    Interactive {
        #[command(flatten)]
        units: UnitArgs,
    },

    /// Print the current part of the day and its background image.
    Daypart,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure()?,
            Command::Show { location, units, json } => {
                let config = Config::load()?;
                let units = units.resolve(&config);
                let mut session = SearchSession::from_config(&config)?;

                let outcome = session.search(&location, &units).await;

                if json {
                    println!("{}", outcome_json(&location, &outcome)?);
                } else {
                    let symbol = config.forecast_temperature_unit.symbol();
                    print_lines(&render::outcome_lines(&outcome, &units, symbol));
                }
            }
            Command::Interactive { units } => {
                let config = Config::load()?;
                let units = units.resolve(&config);
                interactive(&config, &units).await?;
            }
            Command::Daypart => {
                let part = Daypart::now();
                println!("{part} (background: {})", part.background_asset());
            }
        }

        Ok(())
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(api_key.trim().to_string());

    let temperature = Select::new("Temperature unit:", TemperatureUnit::all().to_vec())
        .with_starting_cursor(cursor(TemperatureUnit::all(), config.units.temperature))
        .prompt()
        .context("Failed to read temperature unit")?;

    let wind_speed = Select::new("Wind speed unit:", WindSpeedUnit::all().to_vec())
        .with_starting_cursor(cursor(WindSpeedUnit::all(), config.units.wind_speed))
        .prompt()
        .context("Failed to read wind speed unit")?;

    config.units = UnitPreference::new(temperature, wind_speed);

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}

fn cursor<T: PartialEq>(options: &[T], current: T) -> usize {
    options.iter().position(|option| *option == current).unwrap_or(0)
}

async fn interactive(config: &Config, units: &UnitPreference) -> anyhow::Result<()> {
    let mut session = SearchSession::from_config(config)?;
    let symbol = config.forecast_temperature_unit.symbol();

    let part = Daypart::now();
    println!("Good {part}! (background: {})", part.background_asset());

    loop {
        let location = match Text::new("Location:")
            .with_help_message("Leave empty or press Esc to quit")
            .prompt()
        {
            Ok(location) if location.trim().is_empty() => break,
            Ok(location) => location,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read location"),
        };

        let outcome = session.search(&location, units).await;

        println!();
        print_lines(&render::outcome_lines(&outcome, units, symbol));
        println!();
        print_lines(&render::history_lines(session.history(), units));
        println!();
    }

    tracing::debug!(searches = session.history().len(), "interactive session finished");
    Ok(())
}

fn outcome_json(location: &str, outcome: &SearchOutcome) -> anyhow::Result<String> {
    let value = match outcome {
        SearchOutcome::Rejected => json!({ "location": location, "valid": false }),
        SearchOutcome::Completed { current, forecast } => json!({
            "location": location,
            "valid": true,
            "current": current.as_ref().ok(),
            "current_error": current.as_ref().err().map(|err| err.kind().to_string()),
            "forecast": outcome.forecast_or_empty(),
            "forecast_error": forecast.as_ref().err().map(|err| err.kind().to_string()),
        }),
    };

    serde_json::to_string_pretty(&value).context("Failed to serialize outcome")
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
