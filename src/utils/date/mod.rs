// Date utility functions
// Month keys, month lengths and week-start arithmetic shared by the grid builder

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, Weekday};

/// Weekdays in index order, where index 0 is Sunday.
const WEEKDAYS_FROM_SUNDAY: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

pub fn is_same_day(date1: DateTime<Local>, date2: DateTime<Local>) -> bool {
    date1.date_naive() == date2.date_naive()
}

/// Drop the time-of-day from a host timestamp.
pub fn normalize_to_day(date: DateTime<Local>) -> NaiveDate {
    date.date_naive()
}

/// (year, month) key used for every "same month" comparison.
pub fn month_key(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}

pub fn is_same_month(date1: NaiveDate, date2: NaiveDate) -> bool {
    month_key(date1) == month_key(date2)
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month (1-12).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Map a 0-6 index (0 = Sunday) to a weekday.
pub fn week_start_from_index(index: u8) -> Option<Weekday> {
    WEEKDAYS_FROM_SUNDAY.get(index as usize).copied()
}

pub fn week_start_index(week_start: Weekday) -> u8 {
    week_start.num_days_from_sunday() as u8
}

/// Column of `date` in a row that begins on `week_start`.
pub fn weekday_offset(date: NaiveDate, week_start: Weekday) -> u32 {
    (date.weekday().num_days_from_sunday() + 7 - week_start.num_days_from_sunday()) % 7
}

/// The seven weekdays in column order for the given week start.
pub fn ordered_weekdays(week_start: Weekday) -> [Weekday; 7] {
    let mut days = [week_start; 7];
    for idx in 1..7 {
        days[idx] = days[idx - 1].succ();
    }
    days
}
