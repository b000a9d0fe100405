//! The day schedule container: sorted, non-overlapping daily items.

use serde::Serialize;
use std::fmt;

use crate::errors::{AppError, AppResult};
use crate::models::clock_time::ClockTime;
use crate::models::item::ScheduleItem;

/// Ordered collection of items for one day, insertion-sorted by start time.
/// No two items overlap under [`DaySchedule::can_add`].
#[derive(Debug, Default, Clone, Serialize)]
pub struct DaySchedule {
    items: Vec<ScheduleItem>,
}

impl DaySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ScheduleItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Overlap test against every existing item.
    ///
    /// Three rejection cases: the new start falls inside an existing item,
    /// the new end falls inside an existing item's tail, or the new span
    /// fully contains an existing item. The cases are deliberately
    /// asymmetric; back-to-back intervals pass.
    pub fn can_add(&self, start_at: ClockTime, end_at: ClockTime) -> bool {
        for item in &self.items {
            let starts_inside = start_at >= item.start_at() && item.end_at() > start_at;
            let ends_inside = end_at > item.start_at() && item.end_at() > end_at;
            let swallows = start_at < item.start_at() && item.end_at() < end_at;

            if starts_inside || ends_inside || swallows {
                return false;
            }
        }

        true
    }

    pub fn can_add_item(&self, item: &ScheduleItem) -> bool {
        self.can_add(item.start_at(), item.end_at())
    }

    /// Insert an item at its sorted position.
    ///
    /// The very first item is appended without an overlap check. Returns
    /// false, leaving the schedule untouched, when the overlap test rejects
    /// the item.
    pub fn add(&mut self, item: ScheduleItem) -> bool {
        if self.items.is_empty() {
            self.items.push(item);
            return true;
        }

        if !self.can_add_item(&item) {
            return false;
        }

        let index = self
            .items
            .iter()
            .position(|existing| item.start_at() <= existing.start_at())
            .unwrap_or(self.items.len());

        self.items.insert(index, item);
        true
    }

    /// Convenience: build the item, then [`DaySchedule::add`] it.
    pub fn add_item(
        &mut self,
        start_at: ClockTime,
        end_at: ClockTime,
        description: impl Into<String>,
        completed: bool,
    ) -> AppResult<bool> {
        let item = ScheduleItem::new(start_at, end_at, description, completed)?;
        Ok(self.add(item))
    }

    /// Remove and return the item at `index`; later items shift down.
    pub fn remove(&mut self, index: usize) -> AppResult<ScheduleItem> {
        if index >= self.items.len() {
            return Err(AppError::IndexOutOfRange(index));
        }

        Ok(self.items.remove(index))
    }

    pub fn get(&self, index: usize) -> AppResult<&ScheduleItem> {
        self.items.get(index).ok_or(AppError::IndexOutOfRange(index))
    }

    /// Apply `mutate` to a copy of the item at `index`, re-validate the
    /// result against the rest of the schedule, and re-insert it at its
    /// sorted position. The schedule is left untouched when the mutation or
    /// the overlap check fails.
    pub fn update_at<F>(&mut self, index: usize, mutate: F) -> AppResult<ScheduleItem>
    where
        F: FnOnce(&mut ScheduleItem) -> AppResult<()>,
    {
        if index >= self.items.len() {
            return Err(AppError::IndexOutOfRange(index));
        }

        let mut edited = self.items[index].clone();
        mutate(&mut edited)?;

        let original = self.items.remove(index);

        if !self.can_add_item(&edited) {
            self.items.insert(index, original);
            return Err(AppError::Overlap(format!(
                "{}-{}",
                edited.start_at(),
                edited.end_at()
            )));
        }

        let sorted = self
            .items
            .iter()
            .position(|existing| edited.start_at() <= existing.start_at())
            .unwrap_or(self.items.len());

        self.items.insert(sorted, edited.clone());
        Ok(edited)
    }

    /// Copy of the schedule keeping only the items not yet completed.
    /// The copies go through the normal `add` path, so the result is
    /// independently sorted and overlap-checked.
    pub fn filter_incomplete(&self) -> DaySchedule {
        let mut redo = DaySchedule::new();

        for item in &self.items {
            if !item.is_completed() {
                redo.add(item.clone());
            }
        }

        redo
    }
}

impl fmt::Display for DaySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, item) in self.items.iter().enumerate() {
            writeln!(f, "{index}\t{item}")?;
        }

        Ok(())
    }
}
