//! Clock abstractions for day-boundary derivation.
//!
//! The anonymizer's salt is the current calendar date, so "which day is it"
//! is the only ambient input the core pipeline reads. Injecting the clock as
//! a trait lets production code read the system clock while tests pin the
//! date deterministically.

use jiff::Timestamp;
use jiff::civil::Date;
use jiff::tz::TimeZone;

/// A source for the current calendar date.
///
/// Implementations must be cheap to call: the date is re-read on every
/// anonymization so that day rollover needs no coordination.
pub trait DayClock: Send + Sync {
    /// Returns the current civil date as observed by this clock.
    fn today(&self) -> Date;
}

/// System clock that resolves the current date in a fixed time zone.
///
/// Defaults to UTC so that a fleet spanning multiple time zones buckets
/// requests into identical calendar days.
#[derive(Debug, Clone)]
pub struct SystemDayClock {
    time_zone: TimeZone,
}

impl SystemDayClock {
    /// Creates a clock that resolves dates in the given time zone.
    pub fn new(time_zone: TimeZone) -> Self {
        Self { time_zone }
    }

    /// Creates a clock that resolves dates in UTC.
    pub fn utc() -> Self {
        Self::new(TimeZone::UTC)
    }

    /// Returns the time zone this clock resolves dates in.
    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }
}

impl Default for SystemDayClock {
    fn default() -> Self {
        Self::utc()
    }
}

impl DayClock for SystemDayClock {
    fn today(&self) -> Date {
        Timestamp::now().to_zoned(self.time_zone.clone()).date()
    }
}

/// Clock pinned to a single date.
///
/// Used by tests and deterministic replay to fix the day-derived salt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDayClock {
    date: Date,
}

impl FixedDayClock {
    /// Creates a clock that always reports the given date.
    pub fn new(date: Date) -> Self {
        Self { date }
    }
}

impl DayClock for FixedDayClock {
    fn today(&self) -> Date {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn fixed_clock_reports_its_date() {
        let clock = FixedDayClock::new(date(2024, 1, 15));
        assert_eq!(clock.today(), date(2024, 1, 15));
        assert_eq!(clock.today(), clock.today());
    }

    #[test]
    fn system_clock_defaults_to_utc() {
        let default_clock = SystemDayClock::default();
        let utc_clock = SystemDayClock::utc();
        assert_eq!(default_clock.today(), utc_clock.today());
    }

    #[test]
    fn system_clock_is_stable_across_adjacent_reads() {
        let clock = SystemDayClock::utc();
        assert_eq!(clock.today(), clock.today());
    }
}
