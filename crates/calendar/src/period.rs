//! Trailing billing periods relative to a Shamsi date.

use crate::date::ShamsiDate;
use crate::error::CalendarError;
use crate::range::{GregorianRange, month_range, year_range};

/// A trailing reporting window, anchored on a current Shamsi date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// The previous full Shamsi month.
    LastMonth,
    /// From three months back through the end of the current month.
    LastQuarter,
    /// The whole previous Shamsi year.
    LastYear,
}

/// Returns the Gregorian range for a trailing period, using the fixed
/// boundary table from [`crate::range`].
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if a Gregorian endpoint is not
/// representable.
pub fn period_range(today: ShamsiDate, period: Period) -> Result<GregorianRange, CalendarError> {
    match period {
        Period::LastMonth => {
            let (year, month) = months_back(today.year(), today.month(), 1);
            month_range(year, month)
        }
        Period::LastQuarter => {
            let (start_year, start_month) = months_back(today.year(), today.month(), 3);
            let start = month_range(start_year, start_month)?.start;
            let end = month_range(today.year(), today.month())?.end;
            Ok(GregorianRange { start, end })
        }
        Period::LastYear => year_range(today.year() - 1),
    }
}

/// Steps `n` months back from (year, month), wrapping through Hoot.
fn months_back(year: i32, month: u8, n: u8) -> (i32, u8) {
    let mut m = month as i32 - n as i32;
    let mut y = year;
    if m <= 0 {
        m += 12;
        y -= 1;
    }
    (y, m as u8)
}
