//! Clock field rendering.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};

/// Weekday, date, then time and zone, separated like the other fields.
///
/// chrono renders `%Z` for local time as the numeric offset (`+07:00`), not
/// a zone abbreviation.
pub const DEFAULT_CLOCK_FORMAT: &str = "%a %d %b %Y      %H:%M:%S %Z";

/// Returns an error message if `pattern` is not a usable strftime pattern.
pub fn validate_clock_format(pattern: &str) -> Result<(), String> {
    if pattern.trim().is_empty() {
        return Err("clock_format must not be empty".to_string());
    }
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(format!("Invalid clock_format '{}'", pattern));
    }
    Ok(())
}

/// Renders the current local time.
pub fn now(pattern: &str) -> String {
    render(&Local::now(), pattern)
}

/// Renders `time` with a pattern already checked by [`validate_clock_format`].
pub fn render<Tz: TimeZone>(time: &DateTime<Tz>, pattern: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format(pattern).to_string()
}
