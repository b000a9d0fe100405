//! Clock-of-day value type: a validated (hour, minute) pair.

use serde::Serialize;
use std::fmt;

use crate::errors::{AppError, AppResult};

/// A point within one abstract 24-hour day. No date, no time zone.
///
/// Ordering is lexicographic by hour then minute, which the derived
/// `Ord` provides for free given the field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// First instant of the day (00:00), the default lower query bound.
    pub const DAY_START: ClockTime = ClockTime { hour: 0, minute: 0 };

    /// Last instant of the day (23:59), the default upper query bound.
    pub const DAY_END: ClockTime = ClockTime { hour: 23, minute: 59 };

    /// Build a validated clock time from raw components.
    ///
    /// A minute value of exactly 60 rolls into the next hour before the
    /// range check, so `new(9, 60)` equals `new(10, 0)` while `new(23, 60)`
    /// fails because the hour would become 24. No other rollover is
    /// supported.
    ///
    /// The components are plain `i32` so callers can do offset arithmetic
    /// first and let the range check catch anything that left the day.
    pub fn new(hour: i32, minute: i32) -> AppResult<Self> {
        let (hour, minute) = if minute == 60 {
            (hour + 1, 0)
        } else {
            (hour, minute)
        };

        if !(0..=23).contains(&hour) || !(0..=59).contains(&minute) {
            return Err(AppError::InvalidTime(format!("{hour:02}:{minute:02}")));
        }

        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    pub fn hour(&self) -> i32 {
        self.hour as i32
    }

    pub fn minute(&self) -> i32 {
        self.minute as i32
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
