//! A single scheduled activity: start, end, description, completion flag.

use serde::Serialize;
use std::fmt;

use super::clock_time::ClockTime;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleItem {
    start_at: ClockTime,
    end_at: ClockTime,
    description: String,
    completed: bool,
}

impl ScheduleItem {
    /// Build a validated item. The start must lie strictly before the end.
    pub fn new(
        start_at: ClockTime,
        end_at: ClockTime,
        description: impl Into<String>,
        completed: bool,
    ) -> AppResult<Self> {
        if start_at >= end_at {
            return Err(AppError::InvalidInterval(format!("{start_at}-{end_at}")));
        }

        Ok(Self {
            start_at,
            end_at,
            description: description.into(),
            completed,
        })
    }

    pub fn start_at(&self) -> ClockTime {
        self.start_at
    }

    pub fn end_at(&self) -> ClockTime {
        self.end_at
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Move the start. The new start must still precede the current end.
    pub fn set_start(&mut self, start_at: ClockTime) -> AppResult<()> {
        if start_at >= self.end_at {
            return Err(AppError::InvalidInterval(format!(
                "{start_at}-{}",
                self.end_at
            )));
        }

        self.start_at = start_at;
        Ok(())
    }

    /// Move the end. The current start must still precede the new end.
    pub fn set_end(&mut self, end_at: ClockTime) -> AppResult<()> {
        if self.start_at >= end_at {
            return Err(AppError::InvalidInterval(format!(
                "{}-{end_at}",
                self.start_at
            )));
        }

        self.end_at = end_at;
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}

impl fmt::Display for ScheduleItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.completed { "done" } else { "to do" };

        write!(
            f,
            "{}-{}\t|\t{}\t|\tdescription: {}",
            self.start_at, self.end_at, status, self.description
        )
    }
}
