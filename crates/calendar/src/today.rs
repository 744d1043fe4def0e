//! Current Shamsi date and year.
//!
//! The only module that touches the system clock; everything else in the
//! crate is pure.

use chrono::{Datelike, Local, NaiveDate};

use crate::convert::gregorian_to_shamsi;
use crate::date::ShamsiDate;

/// Returns the Shamsi year a Gregorian date falls in, using a fixed Mar 21
/// rollover.
///
/// This is the historical approximation (`gregorian year - 621`, minus one
/// before Mar 21): real Nowruz shifts by a day across years, so near the
/// year boundary this can disagree with [`gregorian_to_shamsi`]. Use it for
/// defaulting year pickers, not as an authoritative conversion.
pub fn shamsi_year_of(date: NaiveDate) -> i32 {
    let before_nowruz = (date.month(), date.day()) < (3, 21);
    date.year() - 621 - i32::from(before_nowruz)
}

/// Returns the Shamsi year of the current local date.
///
/// Same fixed Mar 21 rollover approximation as [`shamsi_year_of`].
pub fn current_shamsi_year() -> i32 {
    shamsi_year_of(Local::now().date_naive())
}

/// Returns the current local date converted through the exact algorithm.
pub fn current_shamsi_date() -> ShamsiDate {
    gregorian_to_shamsi(Local::now().date_naive())
}
