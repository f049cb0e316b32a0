// Day cell module
// One entry of a month grid

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::utils::date::month_key;

/// A single day shown in a month grid.
///
/// Equality, hashing and ordering only look at `date`, so a cell can be used
/// directly as the identity of a rendered grid slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day_of_month: u32,
    pub is_outside_current_month: bool,
}

impl DayCell {
    /// Create a cell for `date` as displayed within the month `(year, month)`.
    ///
    /// # Examples
    /// ```
    /// use calendar_picker::models::day_cell::DayCell;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2020, 12, 27).unwrap();
    /// let cell = DayCell::new(date, (2021, 1));
    /// assert_eq!(cell.day_of_month, 27);
    /// assert!(cell.is_outside_current_month);
    /// ```
    pub fn new(date: NaiveDate, displayed_month: (i32, u32)) -> Self {
        Self {
            date,
            day_of_month: date.day(),
            is_outside_current_month: month_key(date) != displayed_month,
        }
    }

    /// Stable identifier for list/grid rendering.
    pub fn id(&self) -> NaiveDate {
        self.date
    }

    pub fn is_in_current_month(&self) -> bool {
        !self.is_outside_current_month
    }
}

impl PartialEq for DayCell {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
    }
}

impl Eq for DayCell {}

impl Hash for DayCell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.date.hash(state);
    }
}

impl PartialOrd for DayCell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DayCell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }
}
