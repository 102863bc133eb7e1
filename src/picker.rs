//! View state of the date picker and the transitions that update it.
//!
//! The shell owns a single [`PickerState`] and replaces it with the value
//! returned by [`PickerState::apply`] for every user intent, then re-renders.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::DateError;
use crate::grid::{GridCell, MonthCursor, generate_month_grid};
use crate::report::{AgeReport, build_report};

/// Oldest year offered by the year dropdown.
pub const FIRST_SELECTABLE_YEAR: i32 = 1900;
/// How many years past the current one the dropdown extends.
pub const YEARS_AHEAD: i32 = 10;

/// Direction of a month navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

/// A discrete user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    TogglePicker,
    ClosePicker,
    NavigateMonth(Step),
    ToggleYearDropdown,
    SelectYear(i32),
    SelectDate(NaiveDate),
    Submit,
}

/// One entry of the year dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearOption {
    pub year: i32,
    /// Set for the year currently shown by the cursor.
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
    pub today: NaiveDate,
    pub cursor: MonthCursor,
    pub selected: Option<NaiveDate>,
    pub picker_open: bool,
    pub year_dropdown_open: bool,
    /// Outcome of the latest submit, if any.
    pub outcome: Option<Result<AgeReport, DateError>>,
}

impl PickerState {
    /// Initial state: picker closed, cursor on today's month.
    ///
    /// # Errors
    /// Returns [`DateError::OutOfRange`] when today's year is outside
    /// [`supported_years`](crate::grid::supported_years).
    pub fn new(today: NaiveDate) -> Result<Self, DateError> {
        Ok(Self {
            today,
            cursor: MonthCursor::containing(today)?,
            selected: None,
            picker_open: false,
            year_dropdown_open: false,
            outcome: None,
        })
    }

    pub fn apply(self, intent: Intent) -> Self {
        tracing::trace!(?intent, "applying picker intent");
        match intent {
            Intent::TogglePicker if self.picker_open => self.close(),
            Intent::TogglePicker => Self {
                picker_open: true,
                ..self
            },
            Intent::ClosePicker => self.close(),
            Intent::NavigateMonth(step) => {
                let cursor = match step {
                    Step::Previous => self.cursor.previous(),
                    Step::Next => self.cursor.next(),
                };
                Self { cursor, ..self }
            }
            Intent::ToggleYearDropdown => Self {
                year_dropdown_open: !self.year_dropdown_open,
                ..self
            },
            Intent::SelectYear(year) if !self.selectable_years().contains(&year) => {
                tracing::debug!(year, "year not offered by dropdown, ignoring");
                self
            }
            Intent::SelectYear(year) => Self {
                cursor: self.cursor.with_year(year),
                year_dropdown_open: false,
                ..self
            },
            Intent::SelectDate(date) => Self {
                selected: Some(date),
                ..self
            }
            .close(),
            Intent::Submit => {
                let outcome = match self.selected {
                    Some(birth) => build_report(birth, self.today),
                    None => Err(DateError::NoDateSelected),
                };
                if let Err(e) = &outcome {
                    tracing::info!(error = %e, "submit rejected");
                }
                Self {
                    outcome: Some(outcome),
                    ..self
                }
            }
        }
    }

    fn close(self) -> Self {
        Self {
            picker_open: false,
            year_dropdown_open: false,
            ..self
        }
    }

    /// Grid for the month under the cursor.
    pub fn grid(&self, week_start: Weekday) -> Vec<GridCell> {
        generate_month_grid(self.cursor, self.today, self.selected, week_start)
    }

    /// Text of the date input field, e.g. `"June 15, 1990"`.
    pub fn input_text(&self) -> Option<String> {
        self.selected.map(|d| d.format("%B %d, %Y").to_string())
    }

    /// Years the dropdown offers.
    pub fn selectable_years(&self) -> RangeInclusive<i32> {
        FIRST_SELECTABLE_YEAR..=self.today.year().saturating_add(YEARS_AHEAD)
    }

    /// Dropdown entries, newest first, with the cursor's year marked.
    pub fn year_options(&self) -> impl Iterator<Item = YearOption> {
        let current = self.cursor.year();
        self.selectable_years().rev().map(move |year| YearOption {
            year,
            selected: year == current,
        })
    }
}
