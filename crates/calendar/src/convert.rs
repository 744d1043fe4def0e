//! Exact Gregorian <-> Shamsi conversion via day counts.
//!
//! Both directions share one day-count line anchored at Nowruz 1404
//! (Gregorian 2025-03-21) and the arithmetic leap cycle from
//! [`crate::leap::is_leap_year`], so they are exact inverses of each other.
//! This is NOT the same mapping as the fixed boundary table in
//! [`crate::range`]; the two disagree by a day around some leap years.

use chrono::{NaiveDate, TimeDelta};

use crate::date::ShamsiDate;
use crate::error::CalendarError;
use crate::leap::days_between_nowruz;

/// Shamsi year whose Nowruz pins the day-count line.
const ANCHOR_YEAR: i32 = 1404;

/// Gregorian date of Nowruz of [`ANCHOR_YEAR`].
fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 21).expect("anchor date is always valid")
}

/// Parses a `YYYY-MM-DD` string into a Gregorian date.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if the input cannot be parsed into
/// a valid calendar date. The failure is propagated, never defaulted.
pub fn parse_gregorian(input: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| CalendarError::InvalidDate {
        input: input.to_string(),
    })
}

/// Converts a Gregorian date into the corresponding Shamsi date.
///
/// Total over all representable Gregorian dates: the day count relative to
/// the anchor Nowruz is resolved into a Shamsi year by the leap cycle, and
/// the remaining day-of-year into month and day (months 1..=6 have 31 days,
/// 7..=11 have 30, month 12 has 29 or 30).
pub fn gregorian_to_shamsi(date: NaiveDate) -> ShamsiDate {
    let delta = (date - anchor()).num_days();

    // div by 366 lands within a few years of the target; the loops close
    // the gap from either side.
    let mut year = ANCHOR_YEAR + delta.div_euclid(366) as i32;
    while days_between_nowruz(ANCHOR_YEAR, year + 1) <= delta {
        year += 1;
    }
    while days_between_nowruz(ANCHOR_YEAR, year) > delta {
        year -= 1;
    }

    // 0-based day within the year, 0..=365.
    let doy0 = (delta - days_between_nowruz(ANCHOR_YEAR, year)) as u16;
    let (month, day) = if doy0 < 186 {
        ((doy0 / 31) as u8 + 1, (doy0 % 31) as u8 + 1)
    } else {
        (((doy0 - 186) / 30) as u8 + 7, ((doy0 - 186) % 30) as u8 + 1)
    };
    ShamsiDate::from_parts(year, month, day)
}

/// Converts a Shamsi date into the corresponding Gregorian date.
///
/// Exact inverse of [`gregorian_to_shamsi`].
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if the result falls outside the
/// representable Gregorian date range.
pub fn shamsi_to_gregorian(date: ShamsiDate) -> Result<NaiveDate, CalendarError> {
    let offset = days_between_nowruz(ANCHOR_YEAR, date.year()) + date.day_of_year() as i64 - 1;
    anchor()
        .checked_add_signed(TimeDelta::days(offset))
        .ok_or(CalendarError::YearOutOfRange { year: date.year() })
}
