// Settings module
// Picker preferences persisted as TOML

use chrono::format::{Item, StrftimeItems};
use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::utils::date::week_start_from_index;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    /// 0 = Sunday through 6 = Saturday
    pub first_day_of_week: u8,
    /// Show the "Go to today" and "Cancel" actions under the grid
    pub show_jump_buttons: bool,
    /// strftime pattern for the month heading
    pub title_format: String,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            first_day_of_week: 0, // Sunday
            show_jump_buttons: true,
            title_format: "%B %Y".to_string(),
        }
    }
}

impl PickerSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.first_day_of_week > 6 {
            return Err(format!(
                "first_day_of_week must be between 0 and 6, got {}",
                self.first_day_of_week
            ));
        }

        if self.title_format.trim().is_empty() {
            return Err("title_format cannot be empty".to_string());
        }

        if StrftimeItems::new(&self.title_format).any(|item| matches!(item, Item::Error)) {
            return Err(format!("title_format '{}' is not a valid pattern", self.title_format));
        }

        Ok(())
    }

    /// Week start as a weekday, falling back to Sunday for out-of-range values.
    pub fn week_start(&self) -> Weekday {
        week_start_from_index(self.first_day_of_week).unwrap_or(Weekday::Sun)
    }
}
