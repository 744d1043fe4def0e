//! Shamsi calendar date value type.

use std::fmt;

use crate::error::CalendarError;
use crate::month::{MONTH_START_DOY, days_in_month};

/// A date in the Solar Hijri (Shamsi) calendar.
///
/// Instances always hold a valid month (1..=12) and a day valid for that
/// month and year, enforced at construction. Shamsi dates are ephemeral
/// values computed on demand; they are compared and ordered by
/// (year, month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawShamsiDate")]
pub struct ShamsiDate {
    year: i32,
    month: u8,
    day: u8,
}

/// Unvalidated wire form; [`ShamsiDate`] deserializes through it so the
/// month/day invariants hold for decoded values too.
#[derive(serde::Deserialize)]
struct RawShamsiDate {
    year: i32,
    month: u8,
    day: u8,
}

impl TryFrom<RawShamsiDate> for ShamsiDate {
    type Error = CalendarError;

    fn try_from(raw: RawShamsiDate) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month, raw.day)
    }
}

impl PartialOrd for ShamsiDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ShamsiDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl ShamsiDate {
    /// Creates a new `ShamsiDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`CalendarError::InvalidDay`] if `day` is not valid for the
    /// given month and year (month 12 length depends on the leap year).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Constructs from components already known to satisfy the invariants.
    ///
    /// Callers must guarantee month 1..=12 and a day valid for that month
    /// and year.
    pub(crate) const fn from_parts(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the Shamsi year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `(month, day)` as a tuple.
    pub fn month_day(self) -> (u8, u8) {
        (self.month, self.day)
    }

    /// Returns the 1-based day-of-year (1..=366).
    pub fn day_of_year(self) -> u16 {
        MONTH_START_DOY[self.month as usize] + self.day as u16 - 1
    }
}

impl fmt::Display for ShamsiDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let date = ShamsiDate::new(1404, 1, 1).unwrap();
        assert_eq!(date.year(), 1404);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 1);
        assert_eq!(date.day_of_year(), 1);
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            ShamsiDate::new(1404, 0, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            ShamsiDate::new(1404, 13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn new_invalid_day_zero() {
        assert_eq!(
            ShamsiDate::new(1404, 1, 0).unwrap_err(),
            CalendarError::InvalidDay {
                day: 0,
                month: 1,
                max_day: 31,
            }
        );
    }

    #[test]
    fn new_day_32_rejected() {
        assert_eq!(
            ShamsiDate::new(1404, 1, 32).unwrap_err(),
            CalendarError::InvalidDay {
                day: 32,
                month: 1,
                max_day: 31,
            }
        );
    }

    #[test]
    fn esfand_30_only_in_leap_years() {
        // 1404 is leap, 1403 is not.
        assert!(ShamsiDate::new(1404, 12, 30).is_ok());
        assert_eq!(
            ShamsiDate::new(1403, 12, 30).unwrap_err(),
            CalendarError::InvalidDay {
                day: 30,
                month: 12,
                max_day: 29,
            }
        );
    }

    #[test]
    fn day_of_year_boundaries() {
        assert_eq!(ShamsiDate::new(1404, 1, 31).unwrap().day_of_year(), 31);
        assert_eq!(ShamsiDate::new(1404, 6, 31).unwrap().day_of_year(), 186);
        assert_eq!(ShamsiDate::new(1404, 7, 1).unwrap().day_of_year(), 187);
        assert_eq!(ShamsiDate::new(1403, 12, 29).unwrap().day_of_year(), 365);
        assert_eq!(ShamsiDate::new(1404, 12, 30).unwrap().day_of_year(), 366);
    }

    #[test]
    fn display_iso_style() {
        let date = ShamsiDate::new(1404, 3, 7).unwrap();
        assert_eq!(date.to_string(), "1404-03-07");
    }

    #[test]
    fn ord_same_year() {
        let nowruz = ShamsiDate::new(1404, 1, 1).unwrap();
        let hoot = ShamsiDate::new(1404, 12, 29).unwrap();
        assert!(nowruz < hoot);
    }

    #[test]
    fn ord_different_years() {
        let old = ShamsiDate::new(1403, 12, 29).unwrap();
        let new = ShamsiDate::new(1404, 1, 1).unwrap();
        assert!(old < new);
    }

    #[test]
    fn serde_round_trip() {
        let date = ShamsiDate::new(1404, 12, 30).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#"{"year":1404,"month":12,"day":30}"#);
        let back: ShamsiDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }

    #[test]
    fn serde_rejects_invalid_dates() {
        let err = serde_json::from_str::<ShamsiDate>(r#"{"year":1403,"month":12,"day":30}"#);
        assert!(err.is_err());
        let err = serde_json::from_str::<ShamsiDate>(r#"{"year":1404,"month":13,"day":1}"#);
        assert!(err.is_err());
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<ShamsiDate>();
    }

    #[test]
    fn hash_trait() {
        fn assert_hash<T: std::hash::Hash>() {}
        assert_hash::<ShamsiDate>();
    }
}
