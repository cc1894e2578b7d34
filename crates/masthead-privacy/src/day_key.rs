//! Daily-rotating salt keys.

use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::clock::DayClock;
use crate::error::ParseDayKeyError;

/// A calendar date at one-day granularity, formatted as `YYYY-MM-DD`.
///
/// The day key is the salt for the anonymizer's keyed hash: it bounds the
/// linkability window of anonymized addresses to a single calendar day. The
/// human-readable, monotonic-per-day form gives a natural, auditable time
/// bucket without a rotation scheduler or stored rotation timestamp.
///
/// Day keys are never persisted; they are recomputed from a [`DayClock`] at
/// the point of use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayKey(String);

impl DayKey {
    /// Derives the day key for the given civil date.
    pub fn from_date(date: Date) -> Self {
        Self(format!(
            "{:04}-{:02}-{:02}",
            date.year(),
            date.month(),
            date.day()
        ))
    }

    /// Derives the day key for the current date reported by `clock`.
    pub fn today(clock: &impl DayClock) -> Self {
        Self::from_date(clock.today())
    }

    /// Returns the key as its `YYYY-MM-DD` string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DayKey {
    type Err = ParseDayKeyError;

    /// Parses a zero-padded `YYYY-MM-DD` string into a day key.
    ///
    /// # Errors
    ///
    /// Returns [`ParseDayKeyError`] when the input is not shaped as
    /// `YYYY-MM-DD` or does not name a valid calendar date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseDayKeyError::new(s);

        let mut segments = s.split('-');
        let (year, month, day) = match (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) {
            (Some(year), Some(month), Some(day), None)
                if year.len() == 4 && month.len() == 2 && day.len() == 2 =>
            {
                (year, month, day)
            }
            _ => return Err(invalid()),
        };

        let year: i16 = year.parse().map_err(|_| invalid())?;
        let month: i8 = month.parse().map_err(|_| invalid())?;
        let day: i8 = day.parse().map_err(|_| invalid())?;

        // Rejects out-of-range components such as month 13 or day 32.
        let date = Date::new(year, month, day).map_err(|_| invalid())?;
        Ok(Self::from_date(date))
    }
}

impl TryFrom<String> for DayKey {
    type Error = ParseDayKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayKey> for String {
    fn from(key: DayKey) -> Self {
        key.0
    }
}
