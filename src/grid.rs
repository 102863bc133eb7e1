//! Month grid generation for the date picker.
//!
//! A grid covers whole weeks: from the start of the week holding the 1st of
//! the month to the end of the week holding its last day.

use std::ops::RangeInclusive;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

use crate::age::days_in_month;
use crate::error::DateError;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A validated (year, month) pair: the month currently shown by the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

/// Years a picker may show or treat as "today".
///
/// One year of margin at each end of chrono's range keeps week padding and
/// the following year's anniversary representable.
pub fn supported_years() -> RangeInclusive<i32> {
    (NaiveDate::MIN.year() + 1)..=(NaiveDate::MAX.year() - 1)
}

/// Rejects years outside [`supported_years`].
pub fn check_year(year: i32) -> Result<i32, DateError> {
    let range = supported_years();
    if range.contains(&year) {
        Ok(year)
    } else {
        Err(DateError::OutOfRange {
            year,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidMonth { year, month });
        }
        check_year(year)?;
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Result<Self, DateError> {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Same month in another year. Falls back to `self` when out of range.
    pub fn with_year(self, year: i32) -> Self {
        Self::new(year, self.month).unwrap_or(self)
    }

    /// The month before, rolling December back into the previous year.
    pub fn previous(self) -> Self {
        let (year, month) = if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        };
        Self::new(year, month).unwrap_or(self)
    }

    /// The month after, rolling January into the next year.
    pub fn next(self) -> Self {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        Self::new(year, month).unwrap_or(self)
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, days_in_month(self.year, self.month))
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Header text, e.g. `"June 2024"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }
}

/// One day of the month grid with its display tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

/// Builds the contiguous run of days displayed for `cursor`.
///
/// The result always starts on `week_start`, ends on the day before it, and
/// has a length that is a multiple of 7.
pub fn generate_month_grid(
    cursor: MonthCursor,
    today: NaiveDate,
    selected: Option<NaiveDate>,
    week_start: Weekday,
) -> Vec<GridCell> {
    let first = cursor.first_day();
    let last = cursor.last_day();
    let week_end = week_start.pred();

    let lead = days_after(first.weekday(), week_start);
    let trail = days_after(week_end, last.weekday());

    // cursor years lie inside `supported_years`, so padding stays representable
    let start = first.checked_sub_days(Days::new(lead.into())).unwrap_or(first);
    let end = last.checked_add_days(Days::new(trail.into())).unwrap_or(last);

    start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| GridCell {
            date,
            in_month: date.year() == cursor.year && date.month() == cursor.month,
            is_today: date == today,
            is_selected: selected == Some(date),
        })
        .collect()
}

/// Days from `from` forward to `to`, in `0..7`.
fn days_after(to: Weekday, from: Weekday) -> u32 {
    (to.num_days_from_monday() + 7 - from.num_days_from_monday()) % 7
}

/// Splits a grid into rows of seven cells.
pub fn weeks(cells: &[GridCell]) -> impl Iterator<Item = &[GridCell]> {
    cells.chunks(7)
}

/// Two-letter column headers starting from `week_start`.
pub fn weekday_labels(week_start: Weekday) -> [&'static str; 7] {
    let mut labels = [""; 7];
    let mut day = week_start;
    for label in labels.iter_mut() {
        *label = match day {
            Weekday::Mon => "Mo",
            Weekday::Tue => "Tu",
            Weekday::Wed => "We",
            Weekday::Thu => "Th",
            Weekday::Fri => "Fr",
            Weekday::Sat => "Sa",
            Weekday::Sun => "Su",
        };
        day = day.succ();
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn cursor_rejects_bad_month() {
        assert_eq!(
            MonthCursor::new(2024, 0),
            Err(DateError::InvalidMonth {
                year: 2024,
                month: 0
            })
        );
        assert!(MonthCursor::new(2024, 13).is_err());
    }

    #[test]
    fn cursor_rejects_edge_years() {
        let first = NaiveDate::MIN.year();
        let last = NaiveDate::MAX.year();
        assert!(matches!(
            MonthCursor::containing(NaiveDate::MIN),
            Err(DateError::OutOfRange { .. })
        ));
        assert!(MonthCursor::containing(NaiveDate::MAX).is_err());
        assert!(MonthCursor::new(first + 1, 1).is_ok());
        assert!(MonthCursor::new(last - 1, 12).is_ok());
    }

    #[test]
    fn navigation_stops_at_supported_range() {
        let earliest = MonthCursor::new(*supported_years().start(), 1).unwrap();
        assert_eq!(earliest.previous(), earliest);
        let latest = MonthCursor::new(*supported_years().end(), 12).unwrap();
        assert_eq!(latest.next(), latest);
        assert_eq!(latest.with_year(NaiveDate::MAX.year()), latest);
    }

    #[test]
    fn grids_at_range_edges_are_whole_weeks() {
        let today = d(2024, 6, 15);
        let edges = [
            MonthCursor::new(*supported_years().start(), 1).unwrap(),
            MonthCursor::new(*supported_years().end(), 12).unwrap(),
        ];
        for cursor in edges {
            for week_start in [Weekday::Mon, Weekday::Thu, Weekday::Sun] {
                let grid = generate_month_grid(cursor, today, None, week_start);
                assert_eq!(grid.len() % 7, 0);
                assert_eq!(grid[0].date.weekday(), week_start);
                assert_eq!(grid[grid.len() - 1].date.weekday(), week_start.pred());
                assert!(grid[0].date <= cursor.first_day());
                assert!(grid[grid.len() - 1].date >= cursor.last_day());
            }
        }
    }

    #[test]
    fn cursor_rolls_over_years() {
        let jan = MonthCursor::new(2024, 1).unwrap();
        assert_eq!(jan.previous(), MonthCursor::new(2023, 12).unwrap());
        assert_eq!(jan.previous().next(), jan);
        assert_eq!(MonthCursor::new(2023, 12).unwrap().next(), jan);
    }

    #[test]
    fn cursor_label() {
        assert_eq!(MonthCursor::new(2024, 6).unwrap().label(), "June 2024");
    }

    #[test]
    fn june_2024_monday_start() {
        // June 1st 2024 is a Saturday, June 30th a Sunday
        let grid = generate_month_grid(
            MonthCursor::new(2024, 6).unwrap(),
            d(2024, 6, 15),
            None,
            Weekday::Mon,
        );
        assert_eq!(grid.len(), 35);
        assert_eq!(grid[0].date, d(2024, 5, 27));
        assert_eq!(grid[34].date, d(2024, 6, 30));
        assert!(!grid[0].in_month);
        assert!(grid[5].in_month);
        assert_eq!(grid.iter().filter(|c| c.is_today).count(), 1);
    }

    #[test]
    fn february_2021_fits_four_rows() {
        let grid = generate_month_grid(
            MonthCursor::new(2021, 2).unwrap(),
            d(2024, 1, 1),
            None,
            Weekday::Mon,
        );
        assert_eq!(grid.len(), 28);
        assert!(grid.iter().all(|c| c.in_month));
        assert!(grid.iter().all(|c| !c.is_today));
    }

    #[test]
    fn sunday_start_moves_boundaries() {
        let grid = generate_month_grid(
            MonthCursor::new(2024, 6).unwrap(),
            d(2024, 6, 15),
            Some(d(2024, 6, 3)),
            Weekday::Sun,
        );
        assert_eq!(grid.len(), 42);
        assert_eq!(grid[0].date, d(2024, 5, 26));
        assert_eq!(grid[41].date, d(2024, 7, 6));
        let selected: Vec<_> = grid.iter().filter(|c| c.is_selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].date, d(2024, 6, 3));
    }

    #[test]
    fn every_grid_is_whole_weeks() {
        for week_start in [Weekday::Mon, Weekday::Sun, Weekday::Sat] {
            for year in [1900, 2000, 2023, 2024] {
                for month in 1..=12 {
                    let cursor = MonthCursor::new(year, month).unwrap();
                    let grid = generate_month_grid(cursor, d(2024, 1, 1), None, week_start);
                    assert_eq!(grid.len() % 7, 0, "{year}-{month:02}");
                    assert_eq!(grid[0].date.weekday(), week_start);
                    assert_eq!(grid[grid.len() - 1].date.weekday(), week_start.pred());
                    assert!(grid.windows(2).all(|w| w[0].date.succ_opt() == Some(w[1].date)));
                    assert_eq!(
                        grid.iter().filter(|c| c.in_month).count() as u32,
                        days_in_month(year, month)
                    );
                }
            }
        }
    }

    #[test]
    fn weeks_and_labels() {
        let grid = generate_month_grid(
            MonthCursor::new(2024, 6).unwrap(),
            d(2024, 6, 15),
            None,
            Weekday::Mon,
        );
        assert_eq!(weeks(&grid).count(), 5);
        assert_eq!(
            weekday_labels(Weekday::Sun),
            ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]
        );
    }
}
