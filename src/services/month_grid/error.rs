use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Date arithmetic left the range chrono can represent.
    #[error("date arithmetic out of range: {from} shifted by {delta} {unit}")]
    OutOfRange {
        from: NaiveDate,
        delta: i64,
        unit: &'static str,
    },

    #[error("invalid week start index {0}, expected 0 (Sunday) through 6 (Saturday)")]
    InvalidWeekStart(u8),
}

impl GridError {
    pub(crate) fn days(from: NaiveDate, delta: i64) -> Self {
        GridError::OutOfRange {
            from,
            delta,
            unit: "days",
        }
    }

    pub(crate) fn months(from: NaiveDate, delta: i64) -> Self {
        GridError::OutOfRange {
            from,
            delta,
            unit: "months",
        }
    }
}
