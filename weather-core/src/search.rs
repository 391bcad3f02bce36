use crate::{
    Config, FetchError, SearchHistory, UnitPreference, WeatherProvider, WeatherReading,
    provider::client_from_config,
};

/// Whether searches refused at validation are written to history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryPolicy {
    pub record_rejected: bool,
}

#[derive(Debug)]
pub enum SearchOutcome {
    /// Validation refused the location; nothing was fetched.
    Rejected,
    /// Current conditions and forecast succeed or fail independently.
    Completed {
        current: Result<WeatherReading, FetchError>,
        forecast: Result<Vec<WeatherReading>, FetchError>,
    },
}

impl SearchOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, SearchOutcome::Rejected)
    }

    pub fn current(&self) -> Option<&WeatherReading> {
        match self {
            SearchOutcome::Completed { current: Ok(reading), .. } => Some(reading),
            _ => None,
        }
    }

    /// Forecast hours, or nothing when the forecast could not be fetched.
    pub fn forecast_or_empty(&self) -> &[WeatherReading] {
        match self {
            SearchOutcome::Completed { forecast: Ok(hours), .. } => hours,
            _ => &[],
        }
    }
}

/// Runs the validate-then-fetch flow and keeps the history of one process.
#[derive(Debug)]
pub struct SearchSession {
    provider: Box<dyn WeatherProvider>,
    history: SearchHistory,
    policy: HistoryPolicy,
}

impl SearchSession {
    pub fn new(provider: Box<dyn WeatherProvider>, policy: HistoryPolicy) -> Self {
        Self { provider, history: SearchHistory::new(), policy }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let provider = client_from_config(config)?;
        let policy = HistoryPolicy { record_rejected: config.record_rejected_searches };
        Ok(Self::new(provider, policy))
    }

    pub async fn search(&mut self, location: &str, units: &UnitPreference) -> SearchOutcome {
        if !self.provider.validate_location(location).await {
            if self.policy.record_rejected {
                self.history.append(location, None);
            }
            return SearchOutcome::Rejected;
        }

        let (current, forecast) = tokio::join!(
            self.provider.fetch_current(location, units),
            self.provider.fetch_hourly_forecast(location),
        );

        self.history.append(location, current.as_ref().ok().cloned());

        SearchOutcome::Completed { current, forecast }
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }
}
