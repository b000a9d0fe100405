//! Free-gap arithmetic and search over a day schedule.

use crate::errors::{AppError, AppResult};
use crate::models::clock_time::ClockTime;
use crate::models::item::ScheduleItem;

use super::schedule::DaySchedule;

/// Minutes in one logical day; requests beyond this can never be satisfied.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Difference between two clock times in minutes.
///
/// The hour term uses the absolute difference while the minute term keeps
/// its sign, so the result is not a true duration and can go negative
/// across hour boundaries. The free-time scan and the slot search are both
/// written against this exact output; see the tests for the concrete cases.
pub fn minutes_between(from: ClockTime, to: ClockTime) -> i64 {
    let hours = (from.hour() - to.hour()).abs() as i64;
    let minutes = (from.minute() - to.minute()) as i64;

    hours * 60 + minutes
}

impl DaySchedule {
    /// True when a contiguous free stretch longer than `minutes` exists
    /// anywhere in the day.
    pub fn has_free_time(&self, minutes: i64) -> bool {
        self.has_free_time_from(minutes, ClockTime::DAY_START)
    }

    /// Same, with a caller-supplied lower bound.
    pub fn has_free_time_from(&self, minutes: i64, from: ClockTime) -> bool {
        self.has_free_time_between(minutes, from, ClockTime::DAY_END)
    }

    /// True iff some scanned window measures strictly more than `minutes`.
    ///
    /// Requests longer than a full day always fail; an empty schedule
    /// always succeeds. The windows and their minute counts come from
    /// [`DaySchedule::scan_gaps`].
    pub fn has_free_time_between(&self, minutes: i64, from: ClockTime, to: ClockTime) -> bool {
        if minutes > MINUTES_PER_DAY {
            return false;
        }

        if self.is_empty() {
            return true;
        }

        self.scan_gaps(from, to).iter().any(|gap| gap.minutes > minutes)
    }

    /// Earliest free slot of `minutes` length anywhere in the day.
    pub fn find_slot(&self, minutes: i64) -> AppResult<ScheduleItem> {
        self.find_slot_from(minutes, ClockTime::DAY_START)
    }

    /// Same, with a caller-supplied lower bound.
    pub fn find_slot_from(&self, minutes: i64, from: ClockTime) -> AppResult<ScheduleItem> {
        self.find_slot_between(minutes, from, ClockTime::DAY_END)
    }

    /// Earliest candidate item of `minutes` length between `from` and `to`.
    ///
    /// The existence pre-check runs against the default day bounds, not the
    /// caller's. Candidates are tried in order: starting exactly at `from`,
    /// then at the first interior gap strictly larger than `minutes` whose
    /// leading item ends at or after `from`, then immediately after the
    /// last item. A candidate whose end passes `to` fails the search, and
    /// candidate construction itself fails with `InvalidTime` when the
    /// offset arithmetic leaves the day.
    ///
    /// The returned item is never inserted; callers add it explicitly.
    pub fn find_slot_between(
        &self,
        minutes: i64,
        from: ClockTime,
        to: ClockTime,
    ) -> AppResult<ScheduleItem> {
        if !self.has_free_time(minutes) || minutes > minutes_between(from, to) {
            return Err(AppError::NoFreeSlot(minutes));
        }

        let slot_minutes = (minutes % 60) as i32;
        let slot_hours = ((minutes - minutes % 60) / 60) as i32;

        let candidate = ScheduleItem::new(
            from,
            ClockTime::new(from.hour() + slot_hours, from.minute() + slot_minutes)?,
            "",
            false,
        )?;

        if self.can_add_item(&candidate) {
            return Ok(candidate);
        }

        for pair in self.items().windows(2) {
            let gap_start = pair[0].end_at();
            let gap_end = pair[1].start_at();

            if minutes_between(gap_end, gap_start) > minutes && gap_start >= from {
                let slot_end = ClockTime::new(
                    gap_start.hour() + slot_hours,
                    gap_start.minute() + slot_minutes,
                )?;

                if slot_end > to {
                    return Err(AppError::NoFreeSlot(minutes));
                }

                return ScheduleItem::new(gap_start, slot_end, "", false);
            }
        }

        if let Some(last) = self.items().last() {
            let tail_start = last.end_at();
            let tail_end = ClockTime::new(
                tail_start.hour() + slot_hours,
                tail_start.minute() + slot_minutes,
            )?;
            let candidate = ScheduleItem::new(tail_start, tail_end, "", false)?;

            if self.can_add_item(&candidate) && candidate.end_at() <= to {
                return Ok(candidate);
            }
        }

        Err(AppError::NoFreeSlot(minutes))
    }
}
