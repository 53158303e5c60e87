//! Shift schedule lookups. All functions are pure views over the static
//! schedule supplied by the configuration.

use crate::models::shift::{Shift, ShiftDay};
use chrono::{DateTime, Local};

/// The schedule entry for `now`'s local calendar date, if today is an
/// event day at all.
pub fn todays_schedule<'a>(
    schedule: &'a [ShiftDay],
    now: &DateTime<Local>,
) -> Option<&'a ShiftDay> {
    let today = now.date_naive();
    schedule.iter().find(|day| day.date == today)
}

/// The shift whose window contains `hour`. Overlaps are a data-authoring
/// concern; the first match wins.
pub fn active_shift(day: &ShiftDay, hour: u32) -> Option<&Shift> {
    day.shifts.iter().find(|s| s.covers(hour))
}

/// All of today's shifts that have not ended yet and list `member`,
/// in schedule order. Shown as a reminder when a member clocks out.
pub fn upcoming_shifts_for<'a>(day: &'a ShiftDay, member: &str, hour: u32) -> Vec<&'a Shift> {
    day.shifts
        .iter()
        .filter(|s| s.end_hour > hour && s.lists(member))
        .collect()
}

/// Ordinal label of an event day within the schedule ("day 1", "day 2").
pub fn day_label(schedule: &[ShiftDay], day: &ShiftDay) -> String {
    let idx = schedule
        .iter()
        .position(|d| d.date == day.date)
        .unwrap_or(0);
    format!("day {}", idx + 1)
}
