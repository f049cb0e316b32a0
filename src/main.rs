// Calendar Picker
// Terminal front end: prints one month grid

use anyhow::{anyhow, Context, Result};
use calendar_picker::models::settings::PickerSettings;
use calendar_picker::services::picker::{CalendarPicker, CellEmphasis};
use calendar_picker::services::settings::SettingsService;
use calendar_picker::utils::date::{normalize_to_day, ordered_weekdays};
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Print a month grid for date picking", long_about = None)]
struct Args {
    /// Reference date (YYYY-MM-DD); defaults to today
    #[arg(long, short)]
    date: Option<NaiveDate>,

    /// Months to move before printing, may be negative
    #[arg(long, short, default_value_t = 0, allow_negative_numbers = true)]
    shift: i32,

    /// First day of the week, 0 = Sunday through 6 = Saturday
    #[arg(long, short = 'w')]
    week_start: Option<u8>,

    /// Settings file; defaults to the platform config directory
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Print the grid as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_ref())?;
    if let Some(week_start) = args.week_start {
        settings.first_day_of_week = week_start;
    }
    settings
        .validate()
        .map_err(|e| anyhow!("Invalid settings: {}", e))?;

    let today = normalize_to_day(Local::now());
    let mut picker = CalendarPicker::new(args.date.unwrap_or(today), today, &settings)
        .context("failed to build month grid")?;
    if args.shift != 0 {
        picker
            .traverse(args.shift)
            .with_context(|| format!("cannot shift by {} months", args.shift))?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(picker.grid())?);
    } else {
        print!("{}", render_text(&picker));
    }
    Ok(())
}

fn load_settings(path: Option<&PathBuf>) -> Result<PickerSettings> {
    match path.cloned().or_else(SettingsService::default_path) {
        Some(path) => SettingsService::load(&path),
        None => {
            log::warn!("Unable to resolve config directory; using default settings");
            Ok(PickerSettings::default())
        }
    }
}

/// Today is bracketed, days from neighbouring months are parenthesized.
fn render_text(picker: &CalendarPicker) -> String {
    let mut out = format!("{}\n", picker.title());

    for weekday in ordered_weekdays(picker.week_start()) {
        let name = weekday.to_string();
        out.push_str(&format!(" {} ", &name[..2]));
    }
    out.push('\n');

    for row in picker.grid().rows() {
        for cell in row {
            let day = cell.day_of_month;
            let text = match picker.cell_emphasis(cell) {
                CellEmphasis::Today => format!("[{:>2}]", day),
                CellEmphasis::OutsideMonth => format!("({:>2})", day),
                CellEmphasis::InMonth => format!(" {:>2} ", day),
            };
            out.push_str(&text);
        }
        out.push('\n');
    }
    out
}
