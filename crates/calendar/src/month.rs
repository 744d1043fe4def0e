//! Shamsi month table and month-length rules.

use crate::error::CalendarError;
use crate::leap::is_leap_year;

/// A single entry in the Shamsi month table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct MonthInfo {
    /// Month number (1..=12).
    pub id: u8,
    /// Lookup key used by display layers (e.g. translation tables).
    pub key: &'static str,
    /// English transliteration for direct display.
    pub label: &'static str,
}

/// The twelve Shamsi months in order, Hamal through Hoot.
#[rustfmt::skip]
pub const SHAMSI_MONTHS: [MonthInfo; 12] = [
    MonthInfo { id: 1, key: "hamal", label: "Hamal" },
    MonthInfo { id: 2, key: "saur", label: "Saur" },
    MonthInfo { id: 3, key: "jawza", label: "Jawza" },
    MonthInfo { id: 4, key: "saratan", label: "Saratan" },
    MonthInfo { id: 5, key: "asad", label: "Asad" },
    MonthInfo { id: 6, key: "sunbula", label: "Sunbula" },
    MonthInfo { id: 7, key: "mizan", label: "Mizan" },
    MonthInfo { id: 8, key: "aqrab", label: "Aqrab" },
    MonthInfo { id: 9, key: "qaws", label: "Qaws" },
    MonthInfo { id: 10, key: "jadi", label: "Jadi" },
    MonthInfo { id: 11, key: "dalw", label: "Dalw" },
    MonthInfo { id: 12, key: "hoot", label: "Hoot" },
];

/// Day-of-year on which each Shamsi month starts (index 0 unused, index 1 =
/// Hamal starts at DOY 1, ...). Months 1..=6 have 31 days, months 7..=11
/// have 30, month 12 has 29 or 30 depending on the leap year.
pub(crate) const MONTH_START_DOY: [u16; 13] =
    [0, 1, 32, 63, 94, 125, 156, 187, 217, 247, 277, 307, 337];

/// Returns the number of days in a Shamsi month (31/30/29, or 30 for month
/// 12 in leap years).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    match month {
        1..=6 => Ok(31),
        7..=11 => Ok(30),
        12 => Ok(if is_leap_year(year) { 30 } else { 29 }),
        _ => Err(CalendarError::InvalidMonth { month }),
    }
}

/// Returns the lookup key for a Shamsi month (e.g. `"hamal"` for month 1).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn month_name(month: u8) -> Result<&'static str, CalendarError> {
    month_info(month).map(|m| m.key)
}

/// Returns the display label for a Shamsi month (e.g. `"Hamal"` for month 1).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn month_label(month: u8) -> Result<&'static str, CalendarError> {
    month_info(month).map(|m| m.label)
}

fn month_info(month: u8) -> Result<MonthInfo, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(SHAMSI_MONTHS[month as usize - 1])
}
