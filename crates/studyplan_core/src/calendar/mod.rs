//! Date and calendar-grid projection.
//!
//! # Responsibility
//! - Compute the week and month date windows the views bucket events into.
//! - Filter the event collection by date and by start hour.
//!
//! # Invariants
//! - All functions are pure and restartable; there is no hidden cursor
//!   state between calls.
//! - Filters preserve the insertion order of the underlying collection.

use crate::model::event::StudyEvent;
use chrono::{Datelike, Duration, NaiveDate, Timelike};
use std::ops::RangeInclusive;

/// First hour row of the day grid.
pub const DAY_START_HOUR: u32 = 8;
/// Last hour row of the day grid (inclusive: 8..=21 is 14 rows).
pub const DAY_END_HOUR: u32 = 21;

/// Hour rows of the day grid, 8:00 through 21:00.
pub fn day_hours() -> RangeInclusive<u32> {
    DAY_START_HOUR..=DAY_END_HOUR
}

/// The Sunday-start calendar week containing `date`, as 7 consecutive days.
pub fn week_dates_of(date: NaiveDate) -> [NaiveDate; 7] {
    let sunday = date - Duration::days(i64::from(date.weekday().num_days_from_sunday()));
    std::array::from_fn(|offset| sunday + Duration::days(offset as i64))
}

/// Six Sunday-start weeks covering the month containing `date`.
///
/// Always exactly 42 consecutive days starting from the Sunday on/before the
/// 1st of the month, so leading/trailing cells may belong to adjacent
/// months. Callers detect those by month inequality against `date`.
pub fn month_grid_of(date: NaiveDate) -> Vec<NaiveDate> {
    // day0() is zero-based, so subtracting it lands on the 1st.
    let first_of_month = date - Duration::days(i64::from(date.day0()));
    let grid_start =
        first_of_month - Duration::days(i64::from(first_of_month.weekday().num_days_from_sunday()));
    (0..42)
        .map(|offset| grid_start + Duration::days(offset))
        .collect()
}

/// Events scheduled on exactly `date`, in insertion order.
pub fn events_on_date(date: NaiveDate, events: &[StudyEvent]) -> Vec<&StudyEvent> {
    events.iter().filter(|event| event.date == date).collect()
}

/// Events on `date` whose start time falls in the given hour, in insertion
/// order. Backs the hourly rows of the week grid.
pub fn events_at_hour(date: NaiveDate, hour: u32, events: &[StudyEvent]) -> Vec<&StudyEvent> {
    events
        .iter()
        .filter(|event| event.date == date && event.start_time.hour() == hour)
        .collect()
}
