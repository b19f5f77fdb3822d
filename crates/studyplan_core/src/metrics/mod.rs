//! Aggregate progress metrics.
//!
//! # Responsibility
//! - Derive weekly progress numbers from the current collections on demand.
//!
//! # Invariants
//! - Pure recomputation per query; no cached or materialized state.
//! - `completion_rate` is exactly 0 when no hours are planned (never a
//!   division by zero).

use crate::model::event::StudyEvent;
use crate::model::subject::Subject;
use chrono::{Local, NaiveDate};

/// Snapshot of aggregate study progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudyMetrics {
    /// Sum of weekly-hour targets over all subjects.
    pub total_planned_hours: u32,
    /// Sum of credited studied hours over all subjects.
    pub total_studied_hours: f64,
    /// Percentage `100 * studied / planned`; 0 when nothing is planned.
    pub completion_rate: f64,
    /// Hours from completed events dated `today`.
    pub today_hours: f64,
}

/// Computes aggregate metrics against an explicit `today`.
pub fn study_metrics(
    subjects: &[Subject],
    events: &[StudyEvent],
    today: NaiveDate,
) -> StudyMetrics {
    let total_planned_hours: u32 = subjects.iter().map(|subject| subject.weekly_hours).sum();
    let total_studied_hours: f64 = subjects.iter().map(|subject| subject.studied_hours).sum();

    let completion_rate = if total_planned_hours > 0 {
        total_studied_hours / f64::from(total_planned_hours) * 100.0
    } else {
        0.0
    };

    let today_hours = events
        .iter()
        .filter(|event| event.completed && event.date == today)
        .map(|event| event.duration_hours)
        .sum();

    StudyMetrics {
        total_planned_hours,
        total_studied_hours,
        completion_rate,
        today_hours,
    }
}

/// Computes aggregate metrics against the local calendar date.
pub fn study_metrics_now(subjects: &[Subject], events: &[StudyEvent]) -> StudyMetrics {
    study_metrics(subjects, events, Local::now().date_naive())
}

/// Weekly progress percentage for one subject; 0 when the target is 0.
pub fn subject_progress(subject: &Subject) -> f64 {
    if subject.weekly_hours > 0 {
        subject.studied_hours / f64::from(subject.weekly_hours) * 100.0
    } else {
        0.0
    }
}
