use crate::models::settings::PickerSettings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "config.toml";

pub struct SettingsService;

impl SettingsService {
    /// Platform config location, e.g. `~/.config/calendar-picker/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "CalendarPicker", "calendar-picker")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    /// Load settings, returning defaults when the file does not exist yet
    pub fn load(path: &Path) -> Result<PickerSettings> {
        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(PickerSettings::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings: PickerSettings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings from {}", path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", path.display(), e))?;

        Ok(settings)
    }

    /// Validate and write settings, creating the parent directory if needed
    pub fn save(path: &Path, settings: &PickerSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings).context("failed to serialize settings")?;
        fs::write(path, data)
            .with_context(|| format!("failed to write settings to {}", path.display()))?;
        log::info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(path: &Path) -> Result<()> {
        Self::save(path, &PickerSettings::default())
    }
}
