use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use crate::{model::WeatherReading, units::UnitPreference};

/// A completed search: what was asked for, when, and what came back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchEntry {
    location: String,
    timestamp: NaiveDateTime,
    reading: Option<WeatherReading>,
}

impl SearchEntry {
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// `None` when the search failed after validation.
    pub fn reading(&self) -> Option<&WeatherReading> {
        self.reading.as_ref()
    }

    /// One-line form used by history lists, e.g. `2026-10-18T09:30:00: London - 15°C`.
    pub fn summary(&self, units: &UnitPreference) -> String {
        let timestamp = self.timestamp.format("%Y-%m-%dT%H:%M:%S");
        match &self.reading {
            Some(reading) => format!(
                "{timestamp}: {} - {}{}",
                self.location,
                reading.temperature(),
                units.temperature_symbol()
            ),
            None => format!("{timestamp}: {} - no data", self.location),
        }
    }
}

/// In-memory, append-only log of searches in capture order.
///
/// Appends take `&mut self`; share across tasks behind a lock.
#[derive(Debug, Clone, Default)]
pub struct SearchHistory {
    entries: Vec<SearchEntry>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a search, stamped with the local wall-clock time.
    pub fn append(&mut self, location: impl Into<String>, reading: Option<WeatherReading>) {
        self.append_at(location.into(), reading, Local::now().naive_local());
    }

    fn append_at(&mut self, location: String, reading: Option<WeatherReading>, now: NaiveDateTime) {
        // Clock steps backwards must not break capture order.
        let timestamp = match self.entries.last() {
            Some(last) if last.timestamp > now => last.timestamp,
            _ => now,
        };

        self.entries.push(SearchEntry { location, timestamp, reading });
    }

    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&SearchEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::TemperatureUnit;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    fn reading(temp: f64) -> WeatherReading {
        WeatherReading::current(temp, 70.0, 10.0, "//x/icon.png".into())
    }

    #[test]
    fn append_grows_by_one_and_keeps_prior_entries() {
        let mut history = SearchHistory::new();
        assert!(history.is_empty());

        history.append("London", Some(reading(15.0)));
        let first = history.entries()[0].clone();

        history.append("Paris", None);
        history.append("Oslo", Some(reading(3.5)));

        assert_eq!(history.len(), 3);
        assert_eq!(history.entries()[0], first);
        let locations: Vec<_> = history.entries().iter().map(SearchEntry::location).collect();
        assert_eq!(locations, ["London", "Paris", "Oslo"]);
        assert_eq!(history.latest().map(SearchEntry::location), Some("Oslo"));
    }

    #[test]
    fn timestamps_never_decrease() {
        let mut history = SearchHistory::new();
        history.append_at("A".into(), None, at(10, 0, 0));
        history.append_at("B".into(), None, at(9, 59, 0));
        history.append_at("C".into(), None, at(10, 5, 0));

        let stamps: Vec<_> = history.entries().iter().map(SearchEntry::timestamp).collect();
        assert_eq!(stamps, [at(10, 0, 0), at(10, 0, 0), at(10, 5, 0)]);
    }

    #[test]
    fn failed_search_keeps_absent_reading() {
        let mut history = SearchHistory::new();
        history.append("Atlantis", None);

        assert!(history.entries()[0].reading().is_none());
    }

    #[test]
    fn summary_uses_caller_units() {
        let mut history = SearchHistory::new();
        history.append_at("London".into(), Some(reading(15.0)), at(9, 30, 0));
        history.append_at("Nowhere".into(), None, at(9, 31, 0));

        let celsius = UnitPreference::default();
        assert_eq!(history.entries()[0].summary(&celsius), "2026-10-18T09:30:00: London - 15°C");

        let fahrenheit = UnitPreference { temperature: TemperatureUnit::Fahrenheit, ..celsius };
        assert_eq!(history.entries()[0].summary(&fahrenheit), "2026-10-18T09:30:00: London - 15°F");
        assert_eq!(history.entries()[1].summary(&celsius), "2026-10-18T09:31:00: Nowhere - no data");
    }
}
