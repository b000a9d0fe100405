//! Pure edit workflow over a schedule: pick a field, apply, re-validate.

use crate::errors::AppResult;
use crate::models::clock_time::ClockTime;
use crate::models::item::ScheduleItem;

use super::schedule::DaySchedule;

/// A single field change requested for an item.
#[derive(Debug, Clone)]
pub enum EditField {
    Start(ClockTime),
    End(ClockTime),
    Description(String),
    ToggleCompleted,
}

pub struct EditLogic;

impl EditLogic {
    /// Apply one field change to the item at `index`.
    ///
    /// Time changes go through the item's own setters and the schedule's
    /// overlap re-validation; the schedule is untouched on failure.
    pub fn apply(
        schedule: &mut DaySchedule,
        index: usize,
        field: EditField,
    ) -> AppResult<ScheduleItem> {
        schedule.update_at(index, |item| {
            match field {
                EditField::Start(start_at) => item.set_start(start_at)?,
                EditField::End(end_at) => item.set_end(end_at)?,
                EditField::Description(description) => item.set_description(description),
                EditField::ToggleCompleted => item.set_completed(!item.is_completed()),
            }

            Ok(())
        })
    }
}
