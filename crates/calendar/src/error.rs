//! Error types for the jantari-calendar crate.

/// Error type for all fallible operations in the jantari-calendar crate.
///
/// This enum covers parse failures for Gregorian date input and
/// validation failures for Shamsi month and day values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a string cannot be parsed as a Gregorian calendar date.
    #[error("invalid date: {input:?} (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The unparseable input that was provided.
        input: String,
    },

    /// Returned when a month number is outside its accepted range.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when the Gregorian equivalent of a Shamsi year falls outside
    /// the representable date range.
    #[error("shamsi year {year} has no representable gregorian equivalent")]
    YearOutOfRange {
        /// The out-of-range Shamsi year.
        year: i32,
    },
}
