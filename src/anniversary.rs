//! Next occurrence of a yearly recurring date, and how far away it is.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::age::is_leap_year;

const SECONDS_PER_DAY: i64 = 86_400;

/// The anniversary of `reference` in `year`.
///
/// A February 29 reference falls on February 28 in common years. The
/// substitution depends only on `year`, never on the year of `reference`.
///
/// Returns `None` when `year` is outside chrono's range.
pub fn anniversary_in(reference: NaiveDate, year: i32) -> Option<NaiveDate> {
    let month = reference.month();
    let mut day = reference.day();
    if month == 2 && day == 29 && !is_leap_year(year) {
        day = 28;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Next anniversary of `reference` on or after `today`.
///
/// The candidate in today's year is returned unless it is already past, in
/// which case the following year's anniversary is recomputed from scratch.
///
/// In the last representable year there is no following year; the result
/// then saturates to [`NaiveDate::MAX`], which is still on or after `today`.
/// Callers that need an exact anniversary keep `today` within
/// [`supported_years`](crate::grid::supported_years).
pub fn next_anniversary(reference: NaiveDate, today: NaiveDate) -> NaiveDate {
    match anniversary_in(reference, today.year()) {
        Some(candidate) if candidate >= today => candidate,
        _ => anniversary_in(reference, today.year() + 1).unwrap_or(NaiveDate::MAX),
    }
}

/// Whole days from `now` until the start of `next`, rounded up and never
/// negative.
pub fn days_until(next: NaiveDate, now: NaiveDateTime) -> u32 {
    let target = next.and_time(NaiveTime::MIN);
    let seconds = (target - now).num_seconds();
    // ceiling division; negative spans clamp to zero
    let days = (seconds + SECONDS_PER_DAY - 1).div_euclid(SECONDS_PER_DAY);
    days.max(0) as u32
}

/// [`days_until`] measured from the start of `today`.
pub fn days_until_date(next: NaiveDate, today: NaiveDate) -> u32 {
    days_until(next, today.and_time(NaiveTime::MIN))
}

/// How soon the next birthday is, in display categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "days", rename_all = "snake_case")]
pub enum Countdown {
    Today,
    Tomorrow,
    InDays(u32),
}

impl Countdown {
    pub fn from_days(days: u32) -> Self {
        match days {
            0 => Countdown::Today,
            1 => Countdown::Tomorrow,
            n => Countdown::InDays(n),
        }
    }

    /// Greeting line shown under the age result.
    pub fn message(&self) -> String {
        match self {
            Countdown::Today => "🎉 Happy Birthday! 🎉".to_string(),
            Countdown::Tomorrow => "🎂 Your birthday is tomorrow!".to_string(),
            Countdown::InDays(n) => format!("🎂 Your next birthday is in {n} days"),
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::Today => f.write_str("today"),
            Countdown::Tomorrow => f.write_str("tomorrow"),
            Countdown::InDays(n) => write!(f, "in {n} days"),
        }
    }
}
