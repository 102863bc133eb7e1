//! Error types for the date math core and the picker model.

use chrono::NaiveDate;

/// Error type for all fallible operations in the library.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Returned when the birth date lies after "today".
    #[error("birth date {birth} cannot be in the future (today is {today})")]
    InvalidInput {
        /// The rejected birth date.
        birth: NaiveDate,
        /// The reference date it was compared with.
        today: NaiveDate,
    },

    /// Returned when a (year, month) pair does not name a calendar month.
    #[error("no such month: {year}-{month:02}")]
    InvalidMonth {
        /// Requested year.
        year: i32,
        /// Requested month, expected in `1..=12`.
        month: u32,
    },

    /// Returned when a date lies in a year too close to the ends of the
    /// representable calendar for its month grid or next anniversary.
    #[error("year {year} is outside the supported range {min}..={max}")]
    OutOfRange {
        /// The rejected year.
        year: i32,
        /// Earliest supported year.
        min: i32,
        /// Latest supported year.
        max: i32,
    },

    /// Returned when the picker is submitted without a selected date.
    #[error("no birth date selected")]
    NoDateSelected,
}
