//! Enumeration of the windows examined by the free-time scan.

use serde::Serialize;

use crate::models::clock_time::ClockTime;

use super::free_time::minutes_between;
use super::schedule::DaySchedule;

/// One window the free-time scan measures, with its minute count as the
/// scan computes it (see [`minutes_between`] for the arithmetic caveat).
#[derive(Debug, Clone, Serialize)]
pub struct FreeGap {
    pub start: ClockTime,
    pub end: ClockTime,
    pub minutes: i64,
}

impl DaySchedule {
    /// Windows in scan order: `from` up to the first item's end, each
    /// consecutive pair of items, the last item's end up to `to`. An empty
    /// schedule yields no windows.
    pub fn scan_gaps(&self, from: ClockTime, to: ClockTime) -> Vec<FreeGap> {
        let Some(first) = self.items().first() else {
            return Vec::new();
        };

        let mut gaps = Vec::with_capacity(self.len() + 1);

        gaps.push(FreeGap {
            start: from,
            end: first.end_at(),
            minutes: minutes_between(first.end_at(), from),
        });

        for pair in self.items().windows(2) {
            let start = pair[0].end_at();
            let end = pair[1].start_at();

            gaps.push(FreeGap {
                start,
                end,
                minutes: minutes_between(end, start),
            });
        }

        if let Some(last) = self.items().last() {
            gaps.push(FreeGap {
                start: last.end_at(),
                end: to,
                minutes: minutes_between(to, last.end_at()),
            });
        }

        gaps
    }
}
