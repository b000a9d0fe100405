pub mod check;
pub mod config;
pub mod demo;
pub mod edit;
pub mod find;

use crate::config::Config;
use crate::core::schedule::DaySchedule;
use crate::errors::AppResult;
use crate::models::clock_time::ClockTime;
use crate::ui::messages;
use crate::utils::time::{parse_clock, parse_interval};

/// Build a schedule from `--busy` arguments, warning about rejected items.
pub(crate) fn schedule_from_args(busy: &[String]) -> AppResult<DaySchedule> {
    let mut schedule = DaySchedule::new();

    for arg in busy {
        let item = parse_interval(arg)?;

        if !schedule.add(item) {
            messages::warning(format!("Skipped overlapping interval {arg}"));
        }
    }

    Ok(schedule)
}

/// Resolve search bounds: explicit flags win, the config supplies the rest.
pub(crate) fn resolve_bounds(
    from: &Option<String>,
    to: &Option<String>,
    cfg: &Config,
) -> AppResult<(ClockTime, ClockTime)> {
    let (day_start, day_end) = cfg.day_bounds();

    let from = match from {
        Some(s) => parse_clock(s)?,
        None => day_start,
    };

    let to = match to {
        Some(s) => parse_clock(s)?,
        None => day_end,
    };

    Ok((from, to))
}
