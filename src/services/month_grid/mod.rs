// Month grid service
// Builds the day grid for a month and moves the reference date between months

mod error;

pub use error::GridError;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::models::day_cell::DayCell;
use crate::models::month_grid::{MonthGrid, DAYS_PER_WEEK};
use crate::utils::date::{days_in_month, first_of_month, month_key, weekday_offset};

/// Rows generated before trimming.
const MAX_ROWS: usize = 6;

const CELL_COUNT: usize = MAX_ROWS * DAYS_PER_WEEK;

pub struct MonthGridBuilder;

impl MonthGridBuilder {
    /// Build the grid for the month containing `reference_date`.
    ///
    /// The grid starts on the last `week_start` on or before the first of the
    /// month and runs for six full weeks. Trailing rows holding no day of the
    /// target month are then dropped, so the final row always shows at least
    /// one in-month day.
    ///
    /// `today` does not shape the grid; it is kept on the result so callers
    /// can highlight it with [`MonthGrid::is_today`].
    ///
    /// # Errors
    /// Returns [`GridError::OutOfRange`] when the grid window would reach past
    /// the dates chrono can represent.
    ///
    /// # Examples
    /// ```
    /// use calendar_picker::services::month_grid::MonthGridBuilder;
    /// use chrono::{NaiveDate, Weekday};
    ///
    /// let reference = NaiveDate::from_ymd_opt(2021, 1, 31).unwrap();
    /// let grid = MonthGridBuilder::build(reference, reference, Weekday::Sun).unwrap();
    /// assert_eq!(grid.row_count(), 6);
    /// assert_eq!(grid.first_date(), NaiveDate::from_ymd_opt(2020, 12, 27));
    /// ```
    pub fn build(
        reference_date: NaiveDate,
        today: NaiveDate,
        week_start: Weekday,
    ) -> Result<MonthGrid, GridError> {
        let target = month_key(reference_date);
        let first = first_of_month(reference_date);
        let offset = weekday_offset(first, week_start) as i64;

        let start = first
            .checked_sub_signed(Duration::days(offset))
            .ok_or_else(|| GridError::days(first, -offset))?;
        let span = CELL_COUNT as i64 - 1;
        start
            .checked_add_signed(Duration::days(span))
            .ok_or_else(|| GridError::days(start, span))?;

        let mut rows: Vec<[DayCell; DAYS_PER_WEEK]> = (0..MAX_ROWS)
            .map(|row| {
                std::array::from_fn(|col| {
                    let idx = (row * DAYS_PER_WEEK + col) as i64;
                    DayCell::new(start + Duration::days(idx), target)
                })
            })
            .collect();

        while rows
            .last()
            .is_some_and(|row| row.iter().all(|cell| cell.is_outside_current_month))
        {
            rows.pop();
        }

        log::debug!(
            "Built {}-{:02} grid: {} rows starting {} (week start {:?})",
            target.0,
            target.1,
            rows.len(),
            start,
            week_start
        );

        Ok(MonthGrid::new(target, week_start, today, rows))
    }

    /// Move `reference_date` by whole calendar months.
    ///
    /// The day of month is clamped to the length of the target month, so
    /// Jan 31 + 1 month lands on the last day of February.
    pub fn shift_month(reference_date: NaiveDate, delta_months: i32) -> Result<NaiveDate, GridError> {
        let out_of_range = || GridError::months(reference_date, delta_months as i64);

        let total_months = reference_date.year() as i64 * 12
            + reference_date.month0() as i64
            + delta_months as i64;
        let new_year = i32::try_from(total_months.div_euclid(12)).map_err(|_| out_of_range())?;
        let new_month = total_months.rem_euclid(12) as u32 + 1;
        let day = reference_date.day().min(days_in_month(new_year, new_month));

        NaiveDate::from_ymd_opt(new_year, new_month, day).ok_or_else(out_of_range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn build(reference: NaiveDate, week_start: Weekday) -> MonthGrid {
        MonthGridBuilder::build(reference, reference, week_start).unwrap()
    }

    #[test]
    fn test_january_2021_sunday_start() {
        let grid = build(date(2021, 1, 31), Weekday::Sun);

        assert_eq!(grid.row_count(), 6);
        assert_eq!(grid.first_date(), Some(date(2020, 12, 27)));
        assert_eq!(grid.last_date(), Some(date(2021, 2, 6)));

        let last_row = grid.rows().last().unwrap();
        assert_eq!(last_row[0].date, date(2021, 1, 31));
        assert!(last_row[0].is_in_current_month());
        assert!(last_row[1..].iter().all(|cell| cell.is_outside_current_month));
    }

    #[test]
    fn test_april_2024_drops_trailing_row() {
        let grid = build(date(2024, 4, 15), Weekday::Sun);

        assert_eq!(grid.row_count(), 5);
        assert_eq!(grid.first_date(), Some(date(2024, 3, 31)));
        assert_eq!(grid.last_date(), Some(date(2024, 5, 4)));
    }

    #[test]
    fn test_month_starting_on_week_start_has_no_leading_days() {
        // 2024-09-01 is a Sunday
        let grid = build(date(2024, 9, 10), Weekday::Sun);
        let first = grid.rows()[0][0];
        assert_eq!(first.date, date(2024, 9, 1));
        assert!(first.is_in_current_month());
    }

    #[test]
    fn test_monday_start() {
        // 2021-01-01 is a Friday, so the Monday row begins 2020-12-28
        let grid = build(date(2021, 1, 1), Weekday::Mon);
        assert_eq!(grid.first_date(), Some(date(2020, 12, 28)));
        assert_eq!(grid.week_start(), Weekday::Mon);
        assert!(grid.rows().iter().all(|row| row[0].date.weekday() == Weekday::Mon));
    }

    #[test]
    fn test_december_flags_across_year_boundary() {
        let grid = build(date(2020, 12, 5), Weekday::Sun);
        let january = grid.cell_for(date(2021, 1, 1)).unwrap();
        assert!(january.is_outside_current_month);
        let november = grid.cell_for(date(2020, 11, 29)).unwrap();
        assert!(november.is_outside_current_month);
        assert_eq!(grid.cells().filter(|c| c.is_in_current_month()).count(), 31);
    }

    #[test]
    fn test_february_filling_four_rows_exactly() {
        // 2015-02-01 is a Sunday and February 2015 has 28 days
        let grid = build(date(2015, 2, 14), Weekday::Sun);
        assert_eq!(grid.row_count(), 4);
        assert_eq!(grid.last_date(), Some(date(2015, 2, 28)));
    }

    #[test]
    fn test_build_is_idempotent() {
        let reference = date(2023, 7, 19);
        assert_eq!(build(reference, Weekday::Wed), build(reference, Weekday::Wed));
    }

    #[test]
    fn test_today_is_carried_on_grid() {
        let grid = MonthGridBuilder::build(date(2024, 4, 1), date(2024, 4, 18), Weekday::Sun).unwrap();
        assert_eq!(grid.today(), date(2024, 4, 18));
        assert_eq!(grid.today_cell().map(|c| c.day_of_month), Some(18));
    }

    #[test]
    fn test_build_at_end_of_supported_range_fails() {
        let result = MonthGridBuilder::build(NaiveDate::MAX, NaiveDate::MAX, Weekday::Sun);
        assert!(matches!(result, Err(GridError::OutOfRange { .. })));
    }

    #[test_case(date(2021, 1, 31), 1, date(2021, 2, 28) ; "clamps to short february")]
    #[test_case(date(2024, 1, 31), 1, date(2024, 2, 29) ; "clamps to leap february")]
    #[test_case(date(2021, 3, 31), -1, date(2021, 2, 28) ; "backward clamp")]
    #[test_case(date(2020, 12, 15), 1, date(2021, 1, 15) ; "forward across year")]
    #[test_case(date(2021, 1, 15), -1, date(2020, 12, 15) ; "backward across year")]
    #[test_case(date(2021, 5, 10), 0, date(2021, 5, 10) ; "zero delta")]
    #[test_case(date(2021, 5, 10), -29, date(2018, 12, 10) ; "several years back")]
    #[test_case(date(2021, 5, 31), 25, date(2023, 6, 30) ; "several years forward")]
    fn test_shift_month(reference: NaiveDate, delta: i32, expected: NaiveDate) {
        assert_eq!(MonthGridBuilder::shift_month(reference, delta).unwrap(), expected);
    }

    #[test]
    fn test_shift_month_out_of_range() {
        let result = MonthGridBuilder::shift_month(NaiveDate::MAX, 1);
        assert!(matches!(result, Err(GridError::OutOfRange { .. })));

        let result = MonthGridBuilder::shift_month(date(2021, 1, 1), i32::MIN);
        assert!(matches!(result, Err(GridError::OutOfRange { .. })));
    }
}
