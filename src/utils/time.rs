//! Time parsing helpers: HH:MM strings and busy-interval arguments.

use chrono::{NaiveTime, Timelike};
use regex::Regex;

use crate::errors::{AppError, AppResult};
use crate::models::clock_time::ClockTime;
use crate::models::item::ScheduleItem;

/// Parse a strict `HH:MM` string into a validated [`ClockTime`].
pub fn parse_clock(input: &str) -> AppResult<ClockTime> {
    let parsed = NaiveTime::parse_from_str(input, "%H:%M")
        .map_err(|_| AppError::InvalidTimeFormat(input.to_string()))?;

    ClockTime::new(parsed.hour() as i32, parsed.minute() as i32)
}

/// Parse a busy-interval argument: `HH:MM-HH:MM` with an optional
/// `=description` suffix. The item is created incomplete.
pub fn parse_interval(input: &str) -> AppResult<ScheduleItem> {
    let pattern = Regex::new(r"^(\d{2}:\d{2})-(\d{2}:\d{2})(?:=(.+))?$").unwrap();

    let captures = pattern
        .captures(input)
        .ok_or_else(|| AppError::InvalidIntervalFormat(input.to_string()))?;

    let start_at = parse_clock(&captures[1])?;
    let end_at = parse_clock(&captures[2])?;
    let description = captures.get(3).map(|m| m.as_str()).unwrap_or_default();

    ScheduleItem::new(start_at, end_at, description, false)
}
