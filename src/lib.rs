//! Date math behind a calendar date picker and age calculator.
//!
//! The core is a handful of pure functions over [`chrono::NaiveDate`]:
//!
//! * [`decompose_age`] splits the time since a birth date into years,
//!   months and days;
//! * [`next_anniversary`] finds the next birthday, moving February 29 to
//!   February 28 in common years;
//! * [`generate_month_grid`] lays a month out in whole weeks.
//!
//! [`PickerState`] models the picker itself as a value updated by intents.
//!
//! ```
//! use birthday_picker::{decompose_age, next_anniversary};
//! use chrono::NaiveDate;
//!
//! let birth = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap();
//! let today = NaiveDate::from_ymd_opt(2023, 3, 10).unwrap();
//!
//! assert_eq!(decompose_age(birth, today).unwrap().to_string(), "23 years, 0 months, 10 days");
//! assert_eq!(next_anniversary(birth, today), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
//! ```

pub mod age;
pub mod anniversary;
pub mod error;
pub mod grid;
pub mod picker;
pub mod report;
pub mod svg;

pub use age::{AgeResult, decompose_age};
pub use anniversary::{Countdown, days_until, days_until_date, next_anniversary};
pub use error::DateError;
pub use grid::{GridCell, MonthCursor, generate_month_grid};
pub use picker::{Intent, PickerState, Step};
pub use report::{AgeReport, build_report};
