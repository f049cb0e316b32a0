// Calendar picker state
// Host-owned navigation and selection state around a month grid

use chrono::{NaiveDate, Weekday};
use std::fmt::Write;

use crate::models::day_cell::DayCell;
use crate::models::month_grid::MonthGrid;
use crate::models::settings::PickerSettings;
use crate::services::month_grid::{GridError, MonthGridBuilder};
use crate::utils::date::week_start_from_index;

const FALLBACK_TITLE_FORMAT: &str = "%B %Y";

/// How a cell should be emphasized when drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellEmphasis {
    Today,
    InMonth,
    OutsideMonth,
}

/// State for one picker instance.
///
/// The picker is always displaying the month of `active_date`. Navigation
/// replaces the grid wholesale; a failed navigation leaves the state as it
/// was.
#[derive(Debug, Clone)]
pub struct CalendarPicker {
    active_date: NaiveDate,
    today: NaiveDate,
    week_start: Weekday,
    title_format: String,
    show_jump_buttons: bool,
    is_open: bool,
    grid: MonthGrid,
}

impl CalendarPicker {
    pub fn new(
        active_date: NaiveDate,
        today: NaiveDate,
        settings: &PickerSettings,
    ) -> Result<Self, GridError> {
        let week_start = week_start_from_index(settings.first_day_of_week)
            .ok_or(GridError::InvalidWeekStart(settings.first_day_of_week))?;
        let grid = MonthGridBuilder::build(active_date, today, week_start)?;

        Ok(Self {
            active_date,
            today,
            week_start,
            title_format: settings.title_format.clone(),
            show_jump_buttons: settings.show_jump_buttons,
            is_open: true,
            grid,
        })
    }

    pub fn active_date(&self) -> NaiveDate {
        self.active_date
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn show_jump_buttons(&self) -> bool {
        self.show_jump_buttons
    }

    /// Month heading, e.g. "January 2021".
    pub fn title(&self) -> String {
        let mut title = String::new();
        if write!(title, "{}", self.active_date.format(&self.title_format)).is_err() {
            title.clear();
            // Static pattern; cannot fail
            let _ = write!(title, "{}", self.active_date.format(FALLBACK_TITLE_FORMAT));
        }
        title
    }

    /// Move the displayed month by `delta` months.
    pub fn traverse(&mut self, delta: i32) -> Result<(), GridError> {
        let result = MonthGridBuilder::shift_month(self.active_date, delta)
            .and_then(|date| self.show(date));
        if let Err(err) = &result {
            log::warn!("Ignoring month traversal by {}: {}", delta, err);
        }
        result
    }

    pub fn next_month(&mut self) -> Result<(), GridError> {
        self.traverse(1)
    }

    pub fn previous_month(&mut self) -> Result<(), GridError> {
        self.traverse(-1)
    }

    /// Show today's month and dismiss the picker.
    pub fn jump_to_today(&mut self) -> Result<(), GridError> {
        self.show(self.today)?;
        self.is_open = false;
        Ok(())
    }

    /// Update the host's notion of today, e.g. after midnight.
    pub fn set_today(&mut self, today: NaiveDate) -> Result<(), GridError> {
        self.grid = MonthGridBuilder::build(self.active_date, today, self.week_start)?;
        self.today = today;
        Ok(())
    }

    /// Select a cell's date and dismiss the picker.
    ///
    /// Returns the date for the host's selection callback. Picking a day from
    /// a neighbouring month moves the grid to that month.
    pub fn select(&mut self, cell: &DayCell) -> Result<NaiveDate, GridError> {
        self.show(cell.date)?;
        self.is_open = false;
        log::debug!("Selected {}", cell.date);
        Ok(cell.date)
    }

    /// Dismiss without changing the active date.
    pub fn cancel(&mut self) {
        self.is_open = false;
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn cell_emphasis(&self, cell: &DayCell) -> CellEmphasis {
        if self.grid.is_today(cell) {
            CellEmphasis::Today
        } else if cell.is_outside_current_month {
            CellEmphasis::OutsideMonth
        } else {
            CellEmphasis::InMonth
        }
    }

    fn show(&mut self, date: NaiveDate) -> Result<(), GridError> {
        self.grid = MonthGridBuilder::build(date, self.today, self.week_start)?;
        self.active_date = date;
        log::debug!("Picker now showing {}", self.title());
        Ok(())
    }
}
