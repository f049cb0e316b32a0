// Month grid module
// Rows of day cells for one displayed month

use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::models::day_cell::DayCell;

/// Number of columns in every grid row.
pub const DAYS_PER_WEEK: usize = 7;

/// The day cells a calendar view renders for one month.
///
/// Built by `MonthGridBuilder`; never patched in place. Navigating to another
/// month produces a fresh grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    week_start: Weekday,
    today: NaiveDate,
    rows: Vec<[DayCell; DAYS_PER_WEEK]>,
}

impl MonthGrid {
    pub(crate) fn new(
        (year, month): (i32, u32),
        week_start: Weekday,
        today: NaiveDate,
        rows: Vec<[DayCell; DAYS_PER_WEEK]>,
    ) -> Self {
        Self {
            year,
            month,
            week_start,
            today,
            rows,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Displayed month, 1-12.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn rows(&self) -> &[[DayCell; DAYS_PER_WEEK]] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// All cells in display order.
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> + '_ {
        self.rows.iter().flat_map(|row| row.iter())
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.rows.first().map(|row| row[0].date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.rows.last().map(|row| row[DAYS_PER_WEEK - 1].date)
    }

    /// Find the cell showing `date`, if it is on this grid.
    pub fn cell_for(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells().find(|cell| cell.date == date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.cell_for(date).is_some()
    }

    pub fn is_today(&self, cell: &DayCell) -> bool {
        cell.date == self.today
    }

    /// The cell to highlight as "today", when today falls on this grid.
    pub fn today_cell(&self) -> Option<&DayCell> {
        self.cell_for(self.today)
    }
}
