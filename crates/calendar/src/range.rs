//! Shamsi month/year to Gregorian date ranges via the fixed boundary table.
//!
//! Each Shamsi month maps to hard-coded Gregorian month/day cutoffs
//! (Hamal = Mar 21 - Apr 20, ..., Hoot = Feb 20 - Mar 20). Billing and
//! attendance queries have always filtered by these calendar-day cutoffs,
//! so the table is preserved as-is rather than derived from the leap
//! cycle. Consequently these ranges and the exact converter in
//! [`crate::convert`] are NOT mutual inverses in leap years: the table's
//! month 12 takes its length from the Gregorian February, not from
//! [`crate::leap::is_leap_year`].

use std::fmt;

use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::date::ShamsiDate;
use crate::error::CalendarError;

/// An inclusive range of Gregorian calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct GregorianRange {
    /// First Gregorian day of the range.
    pub start: NaiveDate,
    /// Last Gregorian day of the range.
    pub end: NaiveDate,
}

impl GregorianRange {
    /// Returns the first day as an ISO `YYYY-MM-DD` string.
    pub fn start_iso(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// Returns the last day as an ISO `YYYY-MM-DD` string.
    pub fn end_iso(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for GregorianRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start_iso(), self.end_iso())
    }
}

/// Gregorian (month, day) cutoffs for one Shamsi month, with the Gregorian
/// year offsets relative to `shamsi_year + 621`. Months 10..=12 spill into
/// the following Gregorian year.
struct MonthBoundary {
    start: (u32, u32),
    start_year_offset: i32,
    end: (u32, u32),
    end_year_offset: i32,
}

#[rustfmt::skip]
const MONTH_BOUNDARIES: [MonthBoundary; 12] = [
    MonthBoundary { start: (3, 21),  start_year_offset: 0, end: (4, 20),  end_year_offset: 0 }, // Hamal
    MonthBoundary { start: (4, 21),  start_year_offset: 0, end: (5, 21),  end_year_offset: 0 }, // Saur
    MonthBoundary { start: (5, 22),  start_year_offset: 0, end: (6, 21),  end_year_offset: 0 }, // Jawza
    MonthBoundary { start: (6, 22),  start_year_offset: 0, end: (7, 22),  end_year_offset: 0 }, // Saratan
    MonthBoundary { start: (7, 23),  start_year_offset: 0, end: (8, 22),  end_year_offset: 0 }, // Asad
    MonthBoundary { start: (8, 23),  start_year_offset: 0, end: (9, 22),  end_year_offset: 0 }, // Sunbula
    MonthBoundary { start: (9, 23),  start_year_offset: 0, end: (10, 22), end_year_offset: 0 }, // Mizan
    MonthBoundary { start: (10, 23), start_year_offset: 0, end: (11, 21), end_year_offset: 0 }, // Aqrab
    MonthBoundary { start: (11, 22), start_year_offset: 0, end: (12, 21), end_year_offset: 0 }, // Qaws
    MonthBoundary { start: (12, 22), start_year_offset: 0, end: (1, 20),  end_year_offset: 1 }, // Jadi
    MonthBoundary { start: (1, 21),  start_year_offset: 1, end: (2, 19),  end_year_offset: 1 }, // Dalw
    MonthBoundary { start: (2, 20),  start_year_offset: 1, end: (3, 20),  end_year_offset: 1 }, // Hoot
];

/// Offset between a Shamsi year and the Gregorian year its Nowruz falls in.
const GREGORIAN_YEAR_OFFSET: i32 = 621;

/// Returns the Gregorian date range covered by a Shamsi month.
///
/// `month` 0 is the whole-year sentinel and is equivalent to
/// [`year_range`]; months 1..=12 use the boundary table.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is greater than 12,
/// or [`CalendarError::YearOutOfRange`] if the Gregorian equivalent is not
/// representable.
pub fn month_range(year: i32, month: u8) -> Result<GregorianRange, CalendarError> {
    if month == 0 {
        return year_range(year);
    }
    if month > 12 {
        return Err(CalendarError::InvalidMonth { month });
    }
    let b = &MONTH_BOUNDARIES[month as usize - 1];
    let base = year + GREGORIAN_YEAR_OFFSET;
    Ok(GregorianRange {
        start: gregorian_day(year, base + b.start_year_offset, b.start)?,
        end: gregorian_day(year, base + b.end_year_offset, b.end)?,
    })
}

/// Returns the Gregorian date range covered by a whole Shamsi year:
/// Mar 21 of `year + 621` through Mar 20 of `year + 622`.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if the Gregorian equivalent is
/// not representable.
pub fn year_range(year: i32) -> Result<GregorianRange, CalendarError> {
    let base = year + GREGORIAN_YEAR_OFFSET;
    Ok(GregorianRange {
        start: gregorian_day(year, base, (3, 21))?,
        end: gregorian_day(year, base + 1, (3, 20))?,
    })
}

/// Maps a Shamsi date to a Gregorian day by adding its day offset to the
/// table start of its month.
///
/// This is the historical day-level approximation; for the leap-aware
/// mapping use [`crate::convert::shamsi_to_gregorian`].
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if the Gregorian equivalent is
/// not representable.
pub fn approximate_date(date: ShamsiDate) -> Result<NaiveDate, CalendarError> {
    let start = month_range(date.year(), date.month())?.start;
    start
        .checked_add_signed(TimeDelta::days(date.day() as i64 - 1))
        .ok_or(CalendarError::YearOutOfRange { year: date.year() })
}

/// Returns which Shamsi month (1..=12) a Gregorian day falls in per the
/// boundary table.
pub fn month_of(date: NaiveDate) -> u8 {
    let md = (date.month(), date.day());
    for (i, b) in MONTH_BOUNDARIES.iter().enumerate() {
        let hit = if b.start <= b.end {
            b.start <= md && md <= b.end
        } else {
            // Jadi wraps the Gregorian year boundary.
            md >= b.start || md <= b.end
        };
        if hit {
            return i as u8 + 1;
        }
    }
    // The table tiles the full Gregorian year; fall back to Hamal.
    1
}

fn gregorian_day(
    shamsi_year: i32,
    gregorian_year: i32,
    (month, day): (u32, u32),
) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(gregorian_year, month, day).ok_or(CalendarError::YearOutOfRange {
        year: shamsi_year,
    })
}
