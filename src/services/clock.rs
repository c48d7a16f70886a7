//! Wall-clock time primitives.
//!
//! The optimizer works in minutes since midnight; these helpers convert
//! between that and the "HH:MM" / "H:MM AM" strings used at the boundary.
//! All times are local wall-clock values with no date or timezone.

use chrono::{NaiveTime, Timelike};

use crate::error::RouteError;

/// Parse a 24-hour "HH:MM" string into minutes since midnight.
///
/// A single-digit hour ("9:30") is accepted.
pub fn parse_time_of_day(text: &str) -> Result<i32, RouteError> {
    let time = NaiveTime::parse_from_str(text.trim(), "%H:%M").map_err(|_| {
        RouteError::InvalidTime {
            text: text.to_string(),
        }
    })?;
    Ok(time.hour() as i32 * 60 + time.minute() as i32)
}

/// Render minutes since midnight as a 12-hour clock string, e.g. 570 ->
/// "9:30 AM", 720 -> "12:00 PM".
pub fn format_time_of_day(minutes: i32) -> String {
    let hours = minutes.div_euclid(60);
    let mins = minutes.rem_euclid(60);
    let period = if hours >= 12 { "PM" } else { "AM" };
    let display_hours = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hours, mins, period)
}

/// Render minutes since midnight as a zero-padded 24-hour "HH:MM" string.
pub fn format_hhmm(minutes: i32) -> String {
    format!("{:02}:{:02}", minutes.div_euclid(60), minutes.rem_euclid(60))
}
