//! age.rs
//!
//! This module decomposes the time elapsed between two calendar dates into
//! the human-readable form:
//!     "X years, Y months, Z days"
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python’s
//! relativedelta), so the civil-calendar decomposition is done here:
//!   • whole years first, then whole months counted from the birth date
//!   • month addition clamps to the last day of a shorter month
//!     (Jan 31 + 1 month = Feb 28, or Feb 29 in a leap year)
//!   • the remainder is a plain day count, always below one month
//!
//! This keeps Feb 1 → Mar 1 at exactly one month rather than 28 days.

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::error::DateError;

/// Calendar-aware elapsed time between a birth date and "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeResult {
    pub years: u32,
    /// Always in `0..=11`.
    pub months: u32,
    /// Always in `0..=30`.
    pub days: u32,
}

impl AgeResult {
    /// Whole months elapsed, years included.
    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }
}

impl fmt::Display for AgeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year{}, {} month{}, {} day{}",
            self.years,
            plural(self.years),
            self.months,
            plural(self.months),
            self.days,
            plural(self.days)
        )
    }
}

/// Decomposes the span from `birth` to `today` into years, months and days.
///
/// `birth + total_months()` (clamped to month end) `+ days == today` always
/// holds for the returned value.
///
/// # Errors
/// Returns [`DateError::InvalidInput`] when `birth` is after `today`.
pub fn decompose_age(birth: NaiveDate, today: NaiveDate) -> Result<AgeResult, DateError> {
    if birth > today {
        return Err(DateError::InvalidInput { birth, today });
    }

    // Upper bound on whole months: ignores the day of month, so it overshoots
    // by at most one when today's day is earlier than the birth day.
    let mut months = ((today.year() - birth.year()) * 12 + today.month() as i32
        - birth.month() as i32)
        .max(0) as u32;

    let anchor = loop {
        match birth.checked_add_months(Months::new(months)) {
            Some(date) if date <= today => break date,
            // months == 0 yields `birth`, which is <= today, so this terminates
            _ => months -= 1,
        }
    };

    let days = (today - anchor).num_days() as u32;
    Ok(AgeResult {
        years: months / 12,
        months: months % 12,
        days,
    })
}

fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Returns number of days in a given year/month (handles leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps function total
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn age(years: u32, months: u32, days: u32) -> AgeResult {
        AgeResult {
            years,
            months,
            days,
        }
    }

    #[test]
    fn same_day_is_zero() {
        assert_eq!(decompose_age(d(2020, 5, 17), d(2020, 5, 17)), Ok(age(0, 0, 0)));
    }

    #[test]
    fn exact_anniversary() {
        assert_eq!(decompose_age(d(1990, 6, 15), d(2024, 6, 15)), Ok(age(34, 0, 0)));
    }

    #[test]
    fn february_first_to_march_first_is_one_month() {
        assert_eq!(decompose_age(d(2023, 2, 1), d(2023, 3, 1)), Ok(age(0, 1, 0)));
        assert_eq!(decompose_age(d(2024, 2, 1), d(2024, 3, 1)), Ok(age(0, 1, 0)));
    }

    #[test]
    fn end_of_month_birth_clamps() {
        // Jan 31 + 1 month = Feb 28, one day short of Mar 1
        assert_eq!(decompose_age(d(2023, 1, 31), d(2023, 3, 1)), Ok(age(0, 1, 1)));
        assert_eq!(decompose_age(d(2023, 1, 31), d(2023, 2, 28)), Ok(age(0, 1, 0)));
    }

    #[test]
    fn day_borrow_across_year_boundary() {
        assert_eq!(
            decompose_age(d(1992, 6, 14), d(2025, 1, 3)),
            Ok(age(32, 6, 20))
        );
    }

    #[test]
    fn leap_day_birth() {
        assert_eq!(decompose_age(d(2000, 2, 29), d(2001, 2, 28)), Ok(age(1, 0, 0)));
        assert_eq!(decompose_age(d(2000, 2, 29), d(2001, 3, 29)), Ok(age(1, 1, 0)));
        assert_eq!(decompose_age(d(2000, 2, 29), d(2004, 2, 28)), Ok(age(3, 11, 30)));
    }

    #[test]
    fn future_birth_is_rejected() {
        assert_eq!(
            decompose_age(d(2024, 1, 10), d(2023, 12, 31)),
            Err(DateError::InvalidInput {
                birth: d(2024, 1, 10),
                today: d(2023, 12, 31),
            })
        );
    }

    #[test]
    fn display_pluralizes() {
        assert_eq!(age(1, 1, 1).to_string(), "1 year, 1 month, 1 day");
        assert_eq!(age(34, 0, 2).to_string(), "34 years, 0 months, 2 days");
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 9), 30);
    }
}
