//! Human-friendly text for search outcomes.

use weather_core::{SearchHistory, SearchOutcome, UnitPreference, WeatherReading};

pub const INVALID_LOCATION: &str = "Invalid location. Please enter a valid location name.";
pub const NO_WEATHER: &str = "Could not fetch weather data.";
pub const NO_FORECAST: &str = "Could not fetch forecast data.";

pub fn current_lines(reading: &WeatherReading, units: &UnitPreference) -> Vec<String> {
    vec![
        format!("Temperature: {}{}", reading.temperature(), units.temperature_symbol()),
        format!("Humidity: {}%", reading.humidity()),
        format!("Wind Speed: {} {}", reading.wind_speed(), units.wind_speed_label()),
        format!("Icon: {}", reading.icon_url()),
    ]
}

/// `symbol` is the forecast unit's, which may differ from the current one.
pub fn forecast_line(reading: &WeatherReading, symbol: &str) -> String {
    format!(
        "Date: {} - Temperature: {}{} - Condition: {}",
        reading.timestamp().unwrap_or("-"),
        reading.temperature(),
        symbol,
        reading.condition_text().unwrap_or("-"),
    )
}

pub fn outcome_lines(
    outcome: &SearchOutcome,
    units: &UnitPreference,
    forecast_symbol: &str,
) -> Vec<String> {
    let SearchOutcome::Completed { current, .. } = outcome else {
        return vec![INVALID_LOCATION.to_string()];
    };

    let mut lines = match current {
        Ok(reading) => current_lines(reading, units),
        Err(_) => vec![NO_WEATHER.to_string()],
    };

    lines.push(String::new());
    lines.push("Short-term Forecast:".to_string());

    let hours = outcome.forecast_or_empty();
    if hours.is_empty() {
        lines.push(NO_FORECAST.to_string());
    } else {
        lines.extend(hours.iter().map(|hour| forecast_line(hour, forecast_symbol)));
    }

    lines
}

pub fn history_lines(history: &SearchHistory, units: &UnitPreference) -> Vec<String> {
    let mut lines = vec!["Search History:".to_string()];
    lines.extend(history.entries().iter().map(|entry| entry.summary(units)));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use weather_core::{FetchError, TemperatureUnit, WindSpeedUnit};

    fn hour() -> WeatherReading {
        WeatherReading::hourly(12.5, "//x/i.png".into(), "2026-10-18 13:00".into(), "Sunny".into())
    }

    #[test]
    fn current_block_uses_units() {
        let reading = WeatherReading::current(59.0, 70.0, 6.0, "//x/icon.png".into());
        let units = UnitPreference::new(TemperatureUnit::Fahrenheit, WindSpeedUnit::Mph);

        assert_eq!(
            current_lines(&reading, &units),
            [
                "Temperature: 59°F",
                "Humidity: 70%",
                "Wind Speed: 6 Mph",
                "Icon: https://x/icon.png",
            ]
        );
    }

    #[test]
    fn forecast_line_format() {
        assert_eq!(
            forecast_line(&hour(), "°C"),
            "Date: 2026-10-18 13:00 - Temperature: 12.5°C - Condition: Sunny"
        );
    }

    #[test]
    fn rejected_outcome_renders_invalid_location() {
        let lines = outcome_lines(&SearchOutcome::Rejected, &UnitPreference::default(), "°C");
        assert_eq!(lines, [INVALID_LOCATION]);
    }

    #[test]
    fn failures_render_placeholders() {
        let outcome = SearchOutcome::Completed {
            current: Err(FetchError::Parse("missing".into())),
            forecast: Err(FetchError::Parse("missing".into())),
        };

        let lines = outcome_lines(&outcome, &UnitPreference::default(), "°C");
        assert_eq!(lines.first().map(String::as_str), Some(NO_WEATHER));
        assert_eq!(lines.last().map(String::as_str), Some(NO_FORECAST));
    }

    #[test]
    fn forecast_survives_current_failure() {
        let outcome = SearchOutcome::Completed {
            current: Err(FetchError::Parse("missing".into())),
            forecast: Ok(vec![hour()]),
        };

        let lines = outcome_lines(&outcome, &UnitPreference::default(), "°C");
        assert!(lines.iter().any(|line| line.contains("Condition: Sunny")));
    }

    #[test]
    fn history_lists_every_entry() {
        let mut history = SearchHistory::new();
        history.append("London", Some(WeatherReading::current(15.0, 70.0, 10.0, "//x".into())));
        history.append("Paris", None);

        let lines = history_lines(&history, &UnitPreference::default());
        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with("London - 15°C"));
        assert!(lines[2].ends_with("Paris - no data"));
    }
}
