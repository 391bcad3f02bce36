//! Coarse time-of-day buckets used to pick a background image.

use chrono::{Local, NaiveTime, Timelike};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Daypart {
    Morning,
    Noon,
    Afternoon,
    Evening,
}

impl Daypart {
    /// Half-open buckets: [05:00, 12:00) morning, [12:00, 16:00) noon,
    /// [16:00, 18:00) afternoon, everything else evening.
    pub fn classify(now: NaiveTime) -> Self {
        match now.hour() {
            5..=11 => Daypart::Morning,
            12..=15 => Daypart::Noon,
            16..=17 => Daypart::Afternoon,
            _ => Daypart::Evening,
        }
    }

    pub fn now() -> Self {
        Self::classify(Local::now().time())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Daypart::Morning => "morning",
            Daypart::Noon => "noon",
            Daypart::Afternoon => "afternoon",
            Daypart::Evening => "evening",
        }
    }

    pub fn background_asset(&self) -> &'static str {
        match self {
            Daypart::Morning => "bg/morning.jpg",
            Daypart::Noon => "bg/noon.jpg",
            Daypart::Afternoon => "bg/afternoon.jpg",
            Daypart::Evening => "bg/evening.jpg",
        }
    }
}

impl fmt::Display for Daypart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
