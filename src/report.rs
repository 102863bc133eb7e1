use chrono::NaiveDate;
use serde::Serialize;

use crate::age::{AgeResult, decompose_age};
use crate::anniversary::{Countdown, days_until_date, next_anniversary};
use crate::error::DateError;

/// Everything shown after a birth date is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeReport {
    pub birth_date: NaiveDate,
    pub today: NaiveDate,
    pub age: AgeResult,
    pub next_birthday: NaiveDate,
    pub days_until: u32,
    pub countdown: Countdown,
}

/// Computes age and birthday countdown for `birth` as seen on `today`.
pub fn build_report(birth: NaiveDate, today: NaiveDate) -> Result<AgeReport, DateError> {
    let age = decompose_age(birth, today)?;
    let next_birthday = next_anniversary(birth, today);
    let days_until = days_until_date(next_birthday, today);

    tracing::debug!(%birth, %today, %next_birthday, days_until, "built age report");

    Ok(AgeReport {
        birth_date: birth,
        today,
        age,
        next_birthday,
        days_until,
        countdown: Countdown::from_days(days_until),
    })
}
