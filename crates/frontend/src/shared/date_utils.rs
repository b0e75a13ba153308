//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the application

use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;

/// Format a timestamp as HH:MM, used for transcript entries
/// Example: 2024-03-15T14:02:26 -> "14:02"
pub fn format_clock_time<Tz: TimeZone>(datetime: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    datetime.format("%H:%M").to_string()
}

/// Format a timestamp as HH:MM:SS, used for upload records
/// Example: 2024-03-15T14:02:26 -> "14:02:26"
pub fn format_time_with_seconds<Tz: TimeZone>(datetime: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    datetime.format("%H:%M:%S").to_string()
}

/// Current local time for a new transcript entry
pub fn now_clock_time() -> String {
    format_clock_time(&Local::now())
}

/// Render a UTC instant in the browser's local time zone
pub fn local_time_with_seconds(datetime: &DateTime<Utc>) -> String {
    format_time_with_seconds(&datetime.with_timezone(&Local))
}
