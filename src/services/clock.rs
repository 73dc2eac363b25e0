//! Wall-clock source
//!
//! Aggregation reads "now" exactly once per pass through a `Clock`, so the
//! current month and the rolling window always agree with each other.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of the current local time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    /// Today's local date
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// The system clock, in local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let instant = NaiveDateTime::parse_from_str("2024-02-20 18:30", "%Y-%m-%d %H:%M").unwrap();
        let clock = FixedClock(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 2, 20).unwrap());
    }

    #[test]
    fn test_system_clock_is_recent() {
        let now = SystemClock.now();
        assert!(now.date() > NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }
}
