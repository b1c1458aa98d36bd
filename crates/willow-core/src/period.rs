//! Time-of-day periods and the clock they are read from.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePeriod {
    Morning,
    Day,
    Evening,
    Night,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 4] = [
        TimePeriod::Morning,
        TimePeriod::Day,
        TimePeriod::Evening,
        TimePeriod::Night,
    ];

    /// 06–11 morning, 12–16 day, 17–20 evening, otherwise night.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=11 => TimePeriod::Morning,
            12..=16 => TimePeriod::Day,
            17..=20 => TimePeriod::Evening,
            _ => TimePeriod::Night,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimePeriod::Morning => "morning",
            TimePeriod::Day => "day",
            TimePeriod::Evening => "evening",
            TimePeriod::Night => "night",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimePeriod::Morning => "Morning",
            TimePeriod::Day => "Day",
            TimePeriod::Evening => "Evening",
            TimePeriod::Night => "Night",
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimePeriod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(TimePeriod::Morning),
            "day" | "afternoon" => Ok(TimePeriod::Day),
            "evening" => Ok(TimePeriod::Evening),
            "night" => Ok(TimePeriod::Night),
            _ => Err(ValidationError::invalid(
                "period",
                format!("unknown period '{s}' (expected morning, day, evening or night)"),
            )),
        }
    }
}

/// Source of local wall-clock time.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    fn current_hour(&self) -> u32 {
        self.now().hour()
    }

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    fn current_period(&self) -> TimePeriod {
        TimePeriod::from_hour(self.current_hour())
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Local> {
        (**self).now()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
