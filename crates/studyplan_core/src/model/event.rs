//! Study event domain model.
//!
//! # Responsibility
//! - Define the scheduled study session record.
//! - Derive wall-clock duration from the start/end time pair.
//!
//! # Invariants
//! - `id` is stable and never reused for another event.
//! - `completed` transitions are monotonic: once true, never reset.
//! - `duration_hours` may be zero or negative when `end_time <= start_time`;
//!   such events are accepted, not rejected.

use crate::model::subject::SubjectId;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable opaque identifier for a study event.
pub type EventId = String;

/// A scheduled or completed study session tied to one subject.
///
/// `subject_id` is not enforced as a foreign key: it may dangle when the
/// referenced subject is absent, and consumers tolerate that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyEvent {
    /// Stable opaque id.
    pub id: EventId,
    /// Owning subject. May dangle; never validated against the collection.
    #[serde(rename = "subjectId")]
    pub subject_id: SubjectId,
    /// Session title, non-empty after form validation.
    pub title: String,
    /// Calendar date in ISO `%Y-%m-%d` form on the wire.
    pub date: NaiveDate,
    /// Local time-of-day, `"HH:MM"` on the wire.
    #[serde(rename = "startTime", with = "hhmm")]
    pub start_time: NaiveTime,
    /// Local time-of-day, `"HH:MM"` on the wire.
    #[serde(rename = "endTime", with = "hhmm")]
    pub end_time: NaiveTime,
    /// Signed fractional hours, `end_time - start_time`.
    #[serde(rename = "duration")]
    pub duration_hours: f64,
    /// One-way completion flag, false on creation.
    pub completed: bool,
}

impl StudyEvent {
    /// Creates a pending event with a generated stable id and derived
    /// duration.
    pub fn new(
        subject_id: SubjectId,
        title: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            subject_id,
            title: title.into(),
            date,
            start_time,
            end_time,
            duration_hours: duration_hours_between(start_time, end_time),
            completed: false,
        }
    }

    /// Marks this event as completed. Crediting the owning subject is the
    /// store's job; the model only flips the flag.
    pub fn complete(&mut self) {
        self.completed = true;
    }
}

/// Signed wall-clock difference in fractional hours.
///
/// Minute precision is sufficient: times enter the system as `"HH:MM"`.
pub fn duration_hours_between(start: NaiveTime, end: NaiveTime) -> f64 {
    (end - start).num_minutes() as f64 / 60.0
}

/// Serde codec for `"HH:MM"` time-of-day values.
///
/// Reading also accepts `"HH:MM:SS"` so blobs written with seconds still
/// load; writing always emits the minute form.
mod hhmm {
    use chrono::NaiveTime;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&text, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&text, "%H:%M:%S"))
            .map_err(|_| D::Error::custom(format!("invalid time value `{text}`; expected HH:MM")))
    }
}
