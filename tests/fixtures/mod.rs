// Test fixtures - reusable test data
// Reference dates and grid checks shared by the integration tests

#![allow(dead_code)]

use calendar_picker::models::month_grid::MonthGrid;
use chrono::{Datelike, Duration, NaiveDate};

/// Sample reference dates
pub mod dates {
    use super::*;

    /// Jan 31, 2021 - the month starts on a Friday and needs six rows
    pub fn jan_31_2021() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 1, 31).unwrap()
    }

    /// Apr 15, 2024 - the month fits in five rows
    pub fn mid_april_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 15).unwrap()
    }

    /// Dec 31, 2025 (New Year's Eve)
    pub fn new_years_eve_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Panics with a useful message if `grid` breaks a structural invariant.
pub fn assert_grid_invariants(grid: &MonthGrid, reference: NaiveDate) {
    assert!(
        (4..=6).contains(&grid.row_count()),
        "unexpected row count {}",
        grid.row_count()
    );

    let cells: Vec<_> = grid.cells().collect();
    assert_eq!(cells.len(), grid.row_count() * 7);
    for pair in cells.windows(2) {
        assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
    }

    for cell in &cells {
        let same_month = cell.date.year() == reference.year() && cell.date.month() == reference.month();
        assert_eq!(cell.is_outside_current_month, !same_month, "bad flag on {}", cell.date);
        assert_eq!(cell.day_of_month, cell.date.day());
    }

    let last_row = grid.rows().last().unwrap();
    assert!(last_row.iter().any(|cell| !cell.is_outside_current_month));
}
