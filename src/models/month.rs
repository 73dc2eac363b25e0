//! Calendar month keys (`YYYY-MM`)
//!
//! Used to bucket expenses by month. Ordering is chronological because the
//! year is compared before the month.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::SpendexError;

/// A calendar month, displayed as `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key, validating the month number
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month containing a date
    pub fn of_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month containing a timestamp
    pub fn of_datetime(at: NaiveDateTime) -> Self {
        Self::of_date(at.date())
    }

    /// Check whether a date falls inside this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::of_date(date) == *self
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = SpendexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SpendexError::Validation(format!("Invalid month '{}', expected YYYY-MM", s));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_display_pads() {
        assert_eq!(MonthKey::of_date(date(2024, 2, 15)).to_string(), "2024-02");
        assert_eq!(MonthKey::new(987, 11).unwrap().to_string(), "0987-11");
    }

    #[test]
    fn test_ordering_is_chronological() {
        let dec = MonthKey::new(2023, 12).unwrap();
        let jan = MonthKey::new(2024, 1).unwrap();
        let feb = MonthKey::new(2024, 2).unwrap();
        let mut keys = vec![feb, dec, jan];
        keys.sort();
        assert_eq!(keys, vec![dec, jan, feb]);
    }

    #[test]
    fn test_contains() {
        let feb = MonthKey::new(2024, 2).unwrap();
        assert!(feb.contains(date(2024, 2, 1)));
        assert!(feb.contains(date(2024, 2, 29)));
        assert!(!feb.contains(date(2024, 3, 1)));
        assert!(!feb.contains(date(2023, 2, 10)));
    }

    #[test]
    fn test_parse() {
        assert_eq!("2024-07".parse::<MonthKey>().unwrap(), MonthKey::new(2024, 7).unwrap());
        assert!("2024-13".parse::<MonthKey>().is_err());
        assert!("2024".parse::<MonthKey>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let key = MonthKey::new(2024, 1).unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2024-01\"");
        let back: MonthKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
