//! Shamsi leap-year cycle.

/// Returns `true` if the given Shamsi year is a leap year.
///
/// Uses the arithmetic 128-year cycle in its classical `682/2816` form: a
/// year `y` is leap iff `((y + 38) * 682) mod 2816 < 682`. This disagrees
/// with the astronomical (equinox-observed) calendar for a handful of years
/// per century — notably it marks 1404 rather than 1403 as leap.
pub fn is_leap_year(year: i32) -> bool {
    (682 * (year as i64 + 38)).rem_euclid(2816) < 682
}

/// Number of leap years strictly before `year`, up to a fixed offset.
///
/// Only differences of this value are meaningful. 682/2816 reduces by their
/// gcd 22 to 31/128, so `is_leap_year(y)` holds exactly when this floor sum
/// steps between `y` and `y + 1`.
pub(crate) fn leaps_before(year: i32) -> i64 {
    (31 * (year as i64 - 1 + 38)).div_euclid(128)
}

/// Days from Nowruz (1 Hamal) of year `from` to Nowruz of year `to`.
///
/// Negative when `to` precedes `from`. Closed form; cost does not grow with
/// the span.
pub(crate) fn days_between_nowruz(from: i32, to: i32) -> i64 {
    365 * (to as i64 - from as i64) + leaps_before(to) - leaps_before(from)
}
